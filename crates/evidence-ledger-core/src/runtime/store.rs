// crates/evidence-ledger-core/src/runtime/store.rs
// ============================================================================
// Module: Evidence Ledger In-Memory Store
// Description: Simple in-memory record store for tests and examples.
// Purpose: Provide a deterministic store implementation without external deps.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! This module provides a simple in-memory implementation of [`RecordStore`]
//! for tests and local demos. A single mutex over all state makes the
//! recalculation update and vault compare-and-create naturally atomic. It is
//! not intended for production use.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;

use crate::core::EvidenceRecord;
use crate::core::EvidenceVault;
use crate::core::RecordId;
use crate::core::RecordStatus;
use crate::core::VaultId;
use crate::interfaces::RecalcUpdate;
use crate::interfaces::RecordStore;
use crate::interfaces::StoreError;

// ============================================================================
// SECTION: In-Memory State
// ============================================================================

/// Mutable state behind the store mutex.
#[derive(Debug, Default)]
struct StoreState {
    /// Records keyed by record id.
    records: BTreeMap<String, EvidenceRecord>,
    /// Vaults keyed by owning record id.
    vaults: BTreeMap<String, EvidenceVault>,
}

// ============================================================================
// SECTION: In-Memory Store
// ============================================================================

/// In-memory record store for tests and examples.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRecordStore {
    /// Store state protected by a mutex.
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryRecordStore {
    /// Creates a new in-memory record store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(StoreState::default())),
        }
    }

    /// Inserts or replaces a record. Test and demo seeding helper.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Store`] when the store mutex is poisoned.
    pub fn insert_record(&self, record: EvidenceRecord) -> Result<(), StoreError> {
        let mut guard = self.lock_state()?;
        guard.records.insert(record.record_id.as_str().to_string(), record);
        Ok(())
    }

    /// Locks the store state, mapping poisoning to a store error.
    fn lock_state(&self) -> Result<std::sync::MutexGuard<'_, StoreState>, StoreError> {
        self.state.lock().map_err(|_| StoreError::Store("record store mutex poisoned".to_string()))
    }
}

impl RecordStore for InMemoryRecordStore {
    fn load(&self, record_id: &RecordId) -> Result<Option<EvidenceRecord>, StoreError> {
        let guard = self.lock_state()?;
        Ok(guard.records.get(record_id.as_str()).cloned())
    }

    fn apply_recalculation(
        &self,
        record_id: &RecordId,
        update: RecalcUpdate,
    ) -> Result<(), StoreError> {
        let mut guard = self.lock_state()?;
        let record = guard
            .records
            .get_mut(record_id.as_str())
            .ok_or_else(|| StoreError::Invalid(format!("record not found: {record_id}")))?;
        record.score = update.score;
        record.status = update.status;
        record.ticket_refs = update.ticket_refs;
        record.chat_refs = update.chat_refs;
        record.gaps = update.gaps;
        Ok(())
    }

    fn update_status(&self, record_id: &RecordId, status: RecordStatus) -> Result<(), StoreError> {
        let mut guard = self.lock_state()?;
        let record = guard
            .records
            .get_mut(record_id.as_str())
            .ok_or_else(|| StoreError::Invalid(format!("record not found: {record_id}")))?;
        record.status = status;
        Ok(())
    }

    fn insert_vault(&self, vault: EvidenceVault) -> Result<VaultId, StoreError> {
        let mut guard = self.lock_state()?;
        let key = vault.record_id.as_str().to_string();
        if let Some(existing) = guard.vaults.get(&key) {
            return Ok(existing.vault_id.clone());
        }
        let vault_id = vault.vault_id.clone();
        guard.vaults.insert(key, vault);
        Ok(vault_id)
    }

    fn load_vault(&self, vault_id: &VaultId) -> Result<Option<EvidenceVault>, StoreError> {
        let guard = self.lock_state()?;
        Ok(guard.vaults.values().find(|vault| vault.vault_id == *vault_id).cloned())
    }

    fn load_vault_for_record(
        &self,
        record_id: &RecordId,
    ) -> Result<Option<EvidenceVault>, StoreError> {
        let guard = self.lock_state()?;
        Ok(guard.vaults.get(record_id.as_str()).cloned())
    }
}
