// crates/evidence-ledger-core/src/interfaces/mod.rs
// ============================================================================
// Module: Evidence Ledger Interfaces
// Description: Backend-agnostic interfaces for extraction, policy, and storage.
// Purpose: Define the contract surfaces used by the ledger runtime.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Interfaces define how the evidence pipeline integrates with external
//! systems without embedding backend-specific details. Implementations must
//! be deterministic; the runtime supplies safe fallbacks for policy failures
//! and treats missing records as benign.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::EvidencePolicy;
use crate::core::EvidenceRecord;
use crate::core::EvidenceVault;
use crate::core::Gap;
use crate::core::OrgId;
use crate::core::RecordId;
use crate::core::RecordStatus;
use crate::core::VaultId;

// ============================================================================
// SECTION: Reference Extractor
// ============================================================================

/// Ticket and chat references extracted from free text.
///
/// # Invariants
/// - Lists are deduplicated and ordered by first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRefs {
    /// Ticket references found in the text.
    pub tickets: Vec<String>,
    /// Chat-thread references found in the text.
    pub chats: Vec<String>,
}

/// Extracts ticket and chat references from description text.
///
/// Extraction itself is collaborator-owned; recalculation calls this to
/// defend against upstream extraction drift and keeps the larger of the
/// stored and re-extracted reference sets.
pub trait ReferenceExtractor {
    /// Extracts references from the given text.
    fn extract(&self, text: &str) -> ExtractedRefs;
}

// ============================================================================
// SECTION: Policy Store
// ============================================================================

/// Policy store errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// Policy store reported an error.
    #[error("policy store error: {0}")]
    Store(String),
    /// Stored policy is malformed.
    #[error("policy store malformed policy: {0}")]
    Malformed(String),
}

/// Per-organization evidence policy lookup.
pub trait PolicyStore {
    /// Loads the evidence policy for an organization.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError`] when lookup fails; the recalculation runtime
    /// falls back to its explicit default policy in that case.
    fn policy_for(&self, org_id: &OrgId) -> Result<Option<EvidencePolicy>, PolicyError>;
}

// ============================================================================
// SECTION: Record Store
// ============================================================================

/// Record store errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Store I/O error.
    #[error("record store io error: {0}")]
    Io(String),
    /// Store data is corrupted or fails integrity checks.
    #[error("record store corruption: {0}")]
    Corrupt(String),
    /// Store data is invalid.
    #[error("record store invalid data: {0}")]
    Invalid(String),
    /// Store reported an error.
    #[error("record store error: {0}")]
    Store(String),
}

/// Atomic update applied by recalculation.
///
/// # Invariants
/// - `gaps` fully replaces the stored gap set; stores must never merge it
///   with prior gaps.
/// - Applied as one logical write: readers must never observe `score`
///   without its matching gap set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecalcUpdate {
    /// New evidence score.
    pub score: u8,
    /// New lifecycle status.
    pub status: RecordStatus,
    /// Normalized ticket references.
    pub ticket_refs: Vec<String>,
    /// Normalized chat references.
    pub chat_refs: Vec<String>,
    /// Replacement gap set (delete-all, insert-new).
    pub gaps: Vec<Gap>,
}

/// Record and vault persistence seam.
///
/// The core owns no storage engine; it only requires atomic gap replacement
/// and create-if-absent vault semantics from implementations.
pub trait RecordStore {
    /// Loads a record by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when loading fails.
    fn load(&self, record_id: &RecordId) -> Result<Option<EvidenceRecord>, StoreError>;

    /// Applies a recalculation update atomically.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Invalid`] when the record does not exist and
    /// [`StoreError`] when the write fails.
    fn apply_recalculation(
        &self,
        record_id: &RecordId,
        update: RecalcUpdate,
    ) -> Result<(), StoreError>;

    /// Updates a record's lifecycle status.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Invalid`] when the record does not exist and
    /// [`StoreError`] when the write fails.
    fn update_status(&self, record_id: &RecordId, status: RecordStatus) -> Result<(), StoreError>;

    /// Inserts a vault if none exists for its record.
    ///
    /// Returns the stored vault id: the new vault's id on insert, or the
    /// existing vault's id when one is already present (idempotent create).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the write fails.
    fn insert_vault(&self, vault: EvidenceVault) -> Result<VaultId, StoreError>;

    /// Loads a vault by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when loading fails.
    fn load_vault(&self, vault_id: &VaultId) -> Result<Option<EvidenceVault>, StoreError>;

    /// Loads the vault owned by a record, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when loading fails.
    fn load_vault_for_record(
        &self,
        record_id: &RecordId,
    ) -> Result<Option<EvidenceVault>, StoreError>;
}
