// crates/evidence-ledger-core/src/runtime/recalc.rs
// ============================================================================
// Module: Evidence Ledger Recalculation Orchestrator
// Description: Re-derives score, gaps, and status from current evidence.
// Purpose: Provide the single authoritative recalculation path.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Recalculation is the only path that rewrites a record's score, gap set,
//! and lifecycle status. It re-extracts references from the current
//! description to defend against upstream extraction drift, computes score
//! and gaps in memory, then commits one atomic store update under the
//! record's lock. The gap set is replaced wholesale every run: gaps always
//! reflect current truth, and prior resolution flags are discarded by design.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::EvidencePolicy;
use crate::core::EvidenceRecord;
use crate::core::Gap;
use crate::core::GapSeverity;
use crate::core::PrState;
use crate::core::RecordId;
use crate::core::RecordStatus;
use crate::core::ScoreBreakdown;
use crate::core::ScoreInput;
use crate::core::calculate_score;
use crate::core::detect_gaps;
use crate::interfaces::PolicyStore;
use crate::interfaces::RecalcUpdate;
use crate::interfaces::RecordStore;
use crate::interfaces::ReferenceExtractor;
use crate::interfaces::StoreError;
use crate::runtime::locks::LockError;
use crate::runtime::locks::LockRegistry;

// ============================================================================
// SECTION: Status Thresholds
// ============================================================================

/// Score at or above which a gap-free open record is confirmed.
pub const CONFIRMED_SCORE: u8 = 75;

/// Score below which an open record needs review.
pub const NEEDS_REVIEW_SCORE: u8 = 50;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Recalculation errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - A missing record is not an error; `recalculate` returns `Ok(None)`.
#[derive(Debug, Error)]
pub enum RecalcError {
    /// Record store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Per-record lock was poisoned.
    #[error(transparent)]
    Lock(#[from] LockError),
}

// ============================================================================
// SECTION: Recalculation Outcome
// ============================================================================

/// Result of a completed recalculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecalcOutcome {
    /// Score breakdown derived from the current evidence.
    pub breakdown: ScoreBreakdown,
    /// Replacement gap set.
    pub gaps: Vec<Gap>,
    /// Signals the score and gaps were derived from.
    pub input: ScoreInput,
    /// Lifecycle status after recalculation.
    pub status: RecordStatus,
}

// ============================================================================
// SECTION: Recalculator
// ============================================================================

/// Recalculation orchestrator over collaborator seams.
///
/// The fallback policy is an explicit value supplied at construction: when
/// the policy store has no entry (or fails) for a record's organization, the
/// fallback applies. There is no implicit "first organization" resolution.
pub struct Recalculator<S, P, X> {
    /// Record store implementation.
    store: S,
    /// Policy store implementation.
    policies: P,
    /// Reference extractor implementation.
    extractor: X,
    /// Policy applied when the store cannot supply one.
    fallback_policy: EvidencePolicy,
    /// Shared per-record lock registry.
    locks: LockRegistry,
}

impl<S, P, X> Recalculator<S, P, X>
where
    S: RecordStore,
    P: PolicyStore,
    X: ReferenceExtractor,
{
    /// Creates a new recalculator.
    #[must_use]
    pub fn new(
        store: S,
        policies: P,
        extractor: X,
        fallback_policy: EvidencePolicy,
        locks: LockRegistry,
    ) -> Self {
        Self {
            store,
            policies,
            extractor,
            fallback_policy,
            locks,
        }
    }

    /// Re-derives score, gaps, and status for a record and commits them.
    ///
    /// Returns `Ok(None)` when the record does not exist; callers treat
    /// "nothing to recalculate" as benign.
    ///
    /// # Errors
    ///
    /// Returns [`RecalcError`] when the store fails or the record lock is
    /// poisoned.
    pub fn recalculate(&self, record_id: &RecordId) -> Result<Option<RecalcOutcome>, RecalcError> {
        let lock = self.locks.lock_for(record_id)?;
        let _guard = lock
            .lock()
            .map_err(|_| LockError::Poisoned(format!("record lock poisoned: {record_id}")))?;

        let Some(record) = self.store.load(record_id)? else {
            return Ok(None);
        };

        let (ticket_refs, chat_refs) = self.normalized_refs(&record);
        let input = build_score_input(&record, &ticket_refs, &chat_refs);
        let breakdown = calculate_score(&input);
        let policy = self.resolve_policy(&record);
        let gaps = detect_gaps(&input, &policy);
        let status = next_status(&record, breakdown.total, &gaps);

        self.store.apply_recalculation(
            record_id,
            RecalcUpdate {
                score: breakdown.total,
                status,
                ticket_refs,
                chat_refs,
                gaps: gaps.clone(),
            },
        )?;

        Ok(Some(RecalcOutcome {
            breakdown,
            gaps,
            input,
            status,
        }))
    }

    /// Merges stored references with a fresh extraction from the description.
    ///
    /// Keeps the union in stored-then-extracted order, so the result never
    /// has fewer references than either side.
    fn normalized_refs(&self, record: &EvidenceRecord) -> (Vec<String>, Vec<String>) {
        let extracted = self.extractor.extract(&record.description);
        (
            merge_refs(&record.ticket_refs, extracted.tickets),
            merge_refs(&record.chat_refs, extracted.chats),
        )
    }

    /// Resolves the effective policy for a record's organization.
    fn resolve_policy(&self, record: &EvidenceRecord) -> EvidencePolicy {
        match self.policies.policy_for(&record.org_id) {
            Ok(Some(policy)) => policy,
            Ok(None) | Err(_) => self.fallback_policy,
        }
    }
}

// ============================================================================
// SECTION: Derivation Helpers
// ============================================================================

/// Builds the score input from the record and normalized references.
fn build_score_input(
    record: &EvidenceRecord,
    ticket_refs: &[String],
    chat_refs: &[String],
) -> ScoreInput {
    ScoreInput {
        has_description: record.has_description(),
        description_length: record.description.chars().count(),
        ticket_count: u32::try_from(ticket_refs.len()).unwrap_or(u32::MAX),
        review_count: u32::try_from(record.reviews.len()).unwrap_or(u32::MAX),
        approved_review_count: record.approved_review_count(),
        has_chat_context: !chat_refs.is_empty(),
    }
}

/// Derives the post-recalculation lifecycle status.
///
/// Status only moves while the pull request is open; merge and close
/// transitions are owned by their event handlers.
fn next_status(record: &EvidenceRecord, score: u8, gaps: &[Gap]) -> RecordStatus {
    if record.pr.state != PrState::Open {
        return record.status;
    }
    if score >= CONFIRMED_SCORE && gaps.is_empty() {
        return RecordStatus::Confirmed;
    }
    let has_serious_gap = gaps.iter().any(|gap| gap.severity >= GapSeverity::High);
    if score < NEEDS_REVIEW_SCORE || has_serious_gap {
        return RecordStatus::NeedsReview;
    }
    RecordStatus::Pending
}

/// Returns the union of stored and extracted references, first occurrence wins.
fn merge_refs(stored: &[String], extracted: Vec<String>) -> Vec<String> {
    let mut merged: Vec<String> = stored.to_vec();
    for reference in extracted {
        if !merged.contains(&reference) {
            merged.push(reference);
        }
    }
    merged
}
