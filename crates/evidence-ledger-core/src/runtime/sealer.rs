// crates/evidence-ledger-core/src/runtime/sealer.rs
// ============================================================================
// Module: Evidence Ledger Vault Sealer
// Description: Idempotent vault creation, sealing, and re-verification.
// Purpose: Compile and seal immutable evidence snapshots at merge time.
// Dependencies: crate::{core, interfaces, runtime}, evidence-ledger-frameworks
// ============================================================================

//! ## Overview
//! Sealing runs exactly once per merged record: it assembles the full
//! snapshot, evaluates compliance at that instant, hashes the canonical
//! serialization, and persists everything in one write. Duplicate merge
//! events short-circuit to the existing vault id under the record lock, so
//! two deliveries can never create two vaults. Verification later recomputes
//! the hash over the stored snapshot, never a re-fetch of live data.

// ============================================================================
// SECTION: Imports
// ============================================================================

use evidence_ledger_frameworks::ComplianceFramework;
use evidence_ledger_frameworks::FrameworkCode;
use thiserror::Error;

use crate::core::ComplianceSnapshot;
use crate::core::DEFAULT_HASH_ALGORITHM;
use crate::core::EvidenceVault;
use crate::core::HashError;
use crate::core::PrState;
use crate::core::RecordId;
use crate::core::RecordStatus;
use crate::core::Timestamp;
use crate::core::VaultId;
use crate::core::VaultSnapshot;
use crate::core::VaultSummary;
use crate::core::VerificationReport;
use crate::core::evaluate_frameworks;
use crate::core::hashing::hash_canonical_json;
use crate::interfaces::RecordStore;
use crate::interfaces::StoreError;
use crate::runtime::locks::LockError;
use crate::runtime::locks::LockRegistry;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Vault sealing and verification errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - An existing vault is not an error; sealing is idempotent.
#[derive(Debug, Error)]
pub enum SealError {
    /// Record does not exist.
    #[error("record not found: {0}")]
    RecordNotFound(RecordId),
    /// Vault does not exist.
    #[error("vault not found: {0}")]
    VaultNotFound(VaultId),
    /// Record is not merged; sealing is only valid at merge time.
    #[error("record not merged: {0}")]
    NotMerged(RecordId),
    /// Canonical hashing failed.
    #[error(transparent)]
    Hash(#[from] HashError),
    /// Record store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Per-record lock was poisoned.
    #[error(transparent)]
    Lock(#[from] LockError),
}

// ============================================================================
// SECTION: Vault Sealer
// ============================================================================

/// Vault sealing engine over the record store.
pub struct VaultSealer<S> {
    /// Record store implementation.
    store: S,
    /// Framework catalog used to resolve enabled framework codes.
    catalog: Vec<ComplianceFramework>,
    /// Shared per-record lock registry.
    locks: LockRegistry,
}

impl<S> VaultSealer<S>
where
    S: RecordStore,
{
    /// Creates a new vault sealer.
    #[must_use]
    pub fn new(store: S, catalog: Vec<ComplianceFramework>, locks: LockRegistry) -> Self {
        Self {
            store,
            catalog,
            locks,
        }
    }

    /// Seals the evidence vault for a merged record.
    ///
    /// Idempotent: when a vault already exists for the record, its id is
    /// returned unchanged and nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::RecordNotFound`] when the record is absent,
    /// [`SealError::NotMerged`] when the record's pull request is not merged,
    /// and [`SealError`] for hash, store, or lock failures.
    pub fn seal(
        &self,
        record_id: &RecordId,
        sealed_by: &str,
        sealed_at: Timestamp,
        enabled_frameworks: &[FrameworkCode],
    ) -> Result<VaultId, SealError> {
        let lock = self.locks.lock_for(record_id)?;
        let _guard = lock
            .lock()
            .map_err(|_| LockError::Poisoned(format!("record lock poisoned: {record_id}")))?;

        if let Some(existing) = self.store.load_vault_for_record(record_id)? {
            return Ok(existing.vault_id);
        }

        let record = self
            .store
            .load(record_id)?
            .ok_or_else(|| SealError::RecordNotFound(record_id.clone()))?;
        if record.pr.state != PrState::Merged {
            return Err(SealError::NotMerged(record_id.clone()));
        }

        let compliance = evaluate_frameworks(
            &self.catalog,
            enabled_frameworks,
            &ComplianceSnapshot::from_record(&record),
        );
        let approvals: Vec<String> =
            record.approver_logins().into_iter().map(str::to_string).collect();
        let snapshot = VaultSnapshot {
            record_id: record.record_id.clone(),
            org_id: record.org_id.clone(),
            pr: record.pr.clone(),
            description: record.description.clone(),
            files_changed: record.files_changed.clone(),
            tickets: record.ticket_refs.clone(),
            chat_threads: record.chat_refs.clone(),
            reviews: record.reviews.clone(),
            approvals,
            judgments: record.judgments,
            score: record.score,
            gaps: record.gaps.clone(),
            compliance,
        };

        let hash = hash_canonical_json(DEFAULT_HASH_ALGORITHM, &snapshot)?;
        let vault = EvidenceVault {
            vault_id: VaultId::for_record(record_id),
            record_id: record_id.clone(),
            snapshot,
            hash,
            sealed: true,
            sealed_at,
            sealed_by: sealed_by.to_string(),
        };

        let vault_id = self.store.insert_vault(vault)?;
        self.store.update_status(record_id, RecordStatus::Complete)?;
        Ok(vault_id)
    }

    /// Re-verifies the seal hash of a stored vault.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::VaultNotFound`] when the vault is absent and
    /// [`SealError::Store`] when loading fails. Hash mismatches are reported
    /// inside the [`VerificationReport`], never as errors.
    pub fn verify(&self, vault_id: &VaultId) -> Result<VerificationReport, SealError> {
        let vault = self
            .store
            .load_vault(vault_id)?
            .ok_or_else(|| SealError::VaultNotFound(vault_id.clone()))?;
        Ok(vault.verify())
    }

    /// Returns the display summary for a stored vault.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::VaultNotFound`] when the vault is absent and
    /// [`SealError::Store`] when loading fails.
    pub fn summary(&self, vault_id: &VaultId) -> Result<VaultSummary, SealError> {
        let vault = self
            .store
            .load_vault(vault_id)?
            .ok_or_else(|| SealError::VaultNotFound(vault_id.clone()))?;
        Ok(vault.summary())
    }
}
