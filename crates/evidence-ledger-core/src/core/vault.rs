// crates/evidence-ledger-core/src/core/vault.rs
// ============================================================================
// Module: Evidence Ledger Vault Model
// Description: Immutable sealed snapshots with tamper-evident hashes.
// Purpose: Provide the canonical vault shape, verification, and summaries.
// Dependencies: crate::core::{compliance, evidence, gap, hashing, identifiers, time}, serde
// ============================================================================

//! ## Overview
//! An evidence vault is the point-in-time copy of a record compiled at merge
//! time, hashed over its canonical JCS serialization, and never mutated again.
//! Verification recomputes the hash over the stored snapshot and reports any
//! mismatch as data, never as an error, so integrity checks are safe to call
//! speculatively.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::compliance::FrameworkResult;
use crate::core::evidence::PullRequestFacts;
use crate::core::evidence::QualitativeJudgments;
use crate::core::evidence::Review;
use crate::core::gap::Gap;
use crate::core::hashing::HashDigest;
use crate::core::hashing::hash_canonical_json;
use crate::core::identifiers::OrgId;
use crate::core::identifiers::RecordId;
use crate::core::identifiers::VaultId;
use crate::core::time::Timestamp;

// ============================================================================
// SECTION: Vault Snapshot
// ============================================================================

/// Full point-in-time copy of a record's evidence, sealed at merge time.
///
/// # Invariants
/// - Field set and order are explicit and stable; the seal hash covers the
///   canonical serialization of exactly this structure.
/// - Never mutated after sealing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultSnapshot {
    /// Record identifier the snapshot was taken from.
    pub record_id: RecordId,
    /// Owning organization identifier.
    pub org_id: OrgId,
    /// Pull request metadata at seal time.
    pub pr: PullRequestFacts,
    /// Change description at seal time.
    pub description: String,
    /// Files changed by the pull request.
    pub files_changed: Vec<String>,
    /// Linked ticket references.
    pub tickets: Vec<String>,
    /// Chat-thread references.
    pub chat_threads: Vec<String>,
    /// Review list at seal time.
    pub reviews: Vec<Review>,
    /// Distinct approving reviewer logins.
    pub approvals: Vec<String>,
    /// Qualitative judgments at seal time.
    pub judgments: QualitativeJudgments,
    /// Evidence score at seal time.
    pub score: u8,
    /// Gap set at seal time.
    pub gaps: Vec<Gap>,
    /// Compliance results evaluated at seal time.
    pub compliance: Vec<FrameworkResult>,
}

// ============================================================================
// SECTION: Evidence Vault
// ============================================================================

/// Sealed, tamper-evident evidence vault. One per merged record.
///
/// # Invariants
/// - `hash` is the canonical JCS SHA-256 digest of `snapshot`.
/// - Created once per record; sealing is idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceVault {
    /// Vault identifier.
    pub vault_id: VaultId,
    /// Record identifier the vault belongs to.
    pub record_id: RecordId,
    /// Immutable snapshot contents.
    pub snapshot: VaultSnapshot,
    /// Seal hash over the canonical snapshot serialization.
    pub hash: HashDigest,
    /// Whether the vault has been sealed.
    pub sealed: bool,
    /// Seal timestamp.
    pub sealed_at: Timestamp,
    /// Identity that performed the seal.
    pub sealed_by: String,
}

impl EvidenceVault {
    /// Re-verifies the seal hash over the stored snapshot.
    ///
    /// Safe to call speculatively: mismatches and canonicalization failures
    /// are reported in the result, never raised.
    #[must_use]
    pub fn verify(&self) -> VerificationReport {
        if !self.sealed {
            return VerificationReport {
                valid: false,
                reason: Some("vault has not been sealed".to_string()),
            };
        }
        match hash_canonical_json(self.hash.algorithm, &self.snapshot) {
            Ok(recomputed) if recomputed == self.hash => VerificationReport {
                valid: true,
                reason: None,
            },
            Ok(recomputed) => VerificationReport {
                valid: false,
                reason: Some(format!(
                    "hash mismatch: stored {} recomputed {}",
                    self.hash.value, recomputed.value
                )),
            },
            Err(err) => VerificationReport {
                valid: false,
                reason: Some(format!("snapshot canonicalization failed: {err}")),
            },
        }
    }

    /// Builds the display summary for this vault.
    #[must_use]
    pub fn summary(&self) -> VaultSummary {
        VaultSummary {
            vault_id: self.vault_id.clone(),
            hash: self.hash.value.clone(),
            hash_prefix: self.hash.prefix().to_string(),
            sealed: self.sealed,
            sealed_at: self.sealed_at,
            review_count: self.snapshot.reviews.len(),
            approval_count: self.snapshot.approvals.len(),
            ticket_count: self.snapshot.tickets.len(),
            score: self.snapshot.score,
        }
    }
}

// ============================================================================
// SECTION: Verification Report
// ============================================================================

/// Integrity verification outcome.
///
/// # Invariants
/// - `reason` is present exactly when `valid` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Whether the stored snapshot still matches its seal hash.
    pub valid: bool,
    /// Failure reason when invalid.
    pub reason: Option<String>,
}

// ============================================================================
// SECTION: Vault Summary
// ============================================================================

/// Display summary for external surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultSummary {
    /// Vault identifier.
    pub vault_id: VaultId,
    /// Full seal hash, hex encoded.
    pub hash: String,
    /// Short hash prefix for display.
    pub hash_prefix: String,
    /// Whether the vault is sealed.
    pub sealed: bool,
    /// Seal timestamp.
    pub sealed_at: Timestamp,
    /// Number of reviews captured.
    pub review_count: usize,
    /// Number of distinct approvals captured.
    pub approval_count: usize,
    /// Number of tickets captured.
    pub ticket_count: usize,
    /// Evidence score at seal time.
    pub score: u8,
}
