// crates/evidence-ledger-core/src/runtime/locks.rs
// ============================================================================
// Module: Evidence Ledger Record Locks
// Description: Keyed per-record mutex registry for critical sections.
// Purpose: Serialize recalculation and sealing per record identifier.
// Dependencies: crate::core::identifiers
// ============================================================================

//! ## Overview
//! Recalculation and vault sealing are read-compute-write sequences that are
//! not individually atomic against arbitrary storage. The registry hands out
//! one mutex per record id; both engines hold the record's lock across their
//! full sequence so concurrent webhook deliveries for the same record
//! serialize instead of interleaving. The registry is shared by cloning.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;

use thiserror::Error;

use crate::core::identifiers::RecordId;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Lock registry errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum LockError {
    /// A registry or record mutex was poisoned.
    #[error("record lock poisoned: {0}")]
    Poisoned(String),
}

// ============================================================================
// SECTION: Lock Registry
// ============================================================================

/// Per-record lock registry shared between runtime engines.
#[derive(Debug, Default, Clone)]
pub struct LockRegistry {
    /// Record-id keyed locks protected by a registry mutex.
    locks: Arc<Mutex<BTreeMap<String, Arc<Mutex<()>>>>>,
}

impl LockRegistry {
    /// Creates a new, empty lock registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            locks: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }

    /// Returns the lock for a record, creating it on first use.
    ///
    /// Callers lock the returned mutex and hold the guard for the duration
    /// of their read-compute-write sequence.
    ///
    /// # Errors
    ///
    /// Returns [`LockError::Poisoned`] when the registry mutex is poisoned.
    pub fn lock_for(&self, record_id: &RecordId) -> Result<Arc<Mutex<()>>, LockError> {
        let mut guard = self
            .locks
            .lock()
            .map_err(|_| LockError::Poisoned("lock registry mutex poisoned".to_string()))?;
        Ok(Arc::clone(
            guard.entry(record_id.as_str().to_string()).or_insert_with(|| Arc::new(Mutex::new(()))),
        ))
    }
}
