// crates/evidence-ledger-core/src/core/evidence.rs
// ============================================================================
// Module: Evidence Ledger Decision Evidence Records
// Description: Per-pull-request evidence records, reviews, and qualitative judgments.
// Purpose: Provide the canonical serializable shape of decision evidence.
// Dependencies: crate::core::{gap, identifiers, time}, serde
// ============================================================================

//! ## Overview
//! A decision evidence record (DER) bundles everything known about one pull
//! request: metadata, description, extracted ticket and chat references,
//! reviews, comments, optional qualitative judgments, the derived score,
//! lifecycle status, and the owned gap set. Records are plain data; all
//! derivation lives in the scoring, gap, and compliance modules.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::gap::Gap;
use crate::core::identifiers::OrgId;
use crate::core::identifiers::RecordId;
use crate::core::time::Timestamp;

// ============================================================================
// SECTION: Pull Request Facts
// ============================================================================

/// Pull request lifecycle state as reported by the evidence source.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrState {
    /// Pull request is open.
    Open,
    /// Pull request has been merged.
    Merged,
    /// Pull request was closed without merging.
    Closed,
}

/// Point-in-time pull request metadata.
///
/// # Invariants
/// - `merged_at` is present only when `state` is [`PrState::Merged`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestFacts {
    /// Pull request number within its repository.
    pub number: u64,
    /// Pull request title.
    pub title: String,
    /// Pull request URL.
    pub url: String,
    /// Author login.
    pub author: String,
    /// Base branch name.
    pub base_branch: String,
    /// Head branch name.
    pub head_branch: String,
    /// Lifecycle state.
    pub state: PrState,
    /// Merge timestamp when merged.
    pub merged_at: Option<Timestamp>,
}

// ============================================================================
// SECTION: Reviews and Comments
// ============================================================================

/// Review state as reported by the evidence source.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewState {
    /// Review requested but not submitted.
    Pending,
    /// Reviewer approved the change.
    Approved,
    /// Reviewer requested changes.
    ChangesRequested,
    /// Reviewer commented without a verdict.
    Commented,
    /// Review was dismissed.
    Dismissed,
}

/// A single review record.
///
/// # Invariants
/// - Ordered by submission within the record's review list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Reviewer login.
    pub author: String,
    /// Review state.
    pub state: ReviewState,
    /// Review body text.
    pub body: String,
    /// Submission timestamp.
    pub submitted_at: Timestamp,
}

/// A single pull request comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment author login.
    pub author: String,
    /// Comment body text.
    pub body: String,
    /// File path for inline comments.
    pub file_path: Option<String>,
}

// ============================================================================
// SECTION: Qualitative Judgments
// ============================================================================

/// Wrapper distinguishing absent analyzer output from a known judgment.
///
/// # Invariants
/// - `Unknown` is a first-class state; downstream logic must match it
///   exhaustively rather than treating absence as failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Judgment<T> {
    /// No judgment was supplied.
    Unknown,
    /// A judgment was supplied out-of-band.
    Known(T),
}

impl<T> Judgment<T> {
    /// Returns `true` when a judgment is present.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Returns the judgment value when present.
    #[must_use]
    pub const fn known(&self) -> Option<&T> {
        match self {
            Self::Unknown => None,
            Self::Known(value) => Some(value),
        }
    }
}

impl<T> Default for Judgment<T> {
    fn default() -> Self {
        Self::Unknown
    }
}

/// Documentation quality judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocQuality {
    /// Documentation fully explains the change.
    Complete,
    /// Documentation covers part of the change.
    Partial,
    /// Documentation is insufficient.
    Insufficient,
}

/// Intent alignment judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentAlignment {
    /// Change matches the stated intent.
    Aligned,
    /// Intent is unclear from the evidence.
    Unclear,
    /// Change contradicts the stated intent.
    Misaligned,
}

/// Audit readiness judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditReadiness {
    /// Evidence is ready for audit.
    Ready,
    /// Evidence needs work before audit.
    NeedsWork,
    /// Evidence is not ready for audit.
    NotReady,
}

/// The optional qualitative judgment triple supplied by an analyzer.
///
/// # Invariants
/// - Each field defaults to [`Judgment::Unknown`]; analyzer absence or
///   failure never blocks scoring or gap detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualitativeJudgments {
    /// Documentation quality judgment.
    pub doc_quality: Judgment<DocQuality>,
    /// Intent alignment judgment.
    pub intent_alignment: Judgment<IntentAlignment>,
    /// Audit readiness judgment.
    pub audit_readiness: Judgment<AuditReadiness>,
}

// ============================================================================
// SECTION: Record Status
// ============================================================================

/// Evidence record lifecycle status.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
/// - Recalculation only moves status while the pull request is open;
///   `Complete` is set by vault sealing, `Incomplete` by close handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    /// Evidence is being accumulated.
    Pending,
    /// Evidence has deficiencies requiring attention.
    NeedsReview,
    /// Evidence is complete enough to confirm.
    Confirmed,
    /// Record was sealed at merge time.
    Complete,
    /// Record was closed without sufficient evidence.
    Incomplete,
}

// ============================================================================
// SECTION: Evidence Record
// ============================================================================

/// Decision evidence record: one per tracked pull request.
///
/// # Invariants
/// - `score` is always in `0 ..= 100`.
/// - `gaps` always equals the detector output for the current evidence and
///   policy; recalculation replaces the set wholesale, never patches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceRecord {
    /// Record identifier.
    pub record_id: RecordId,
    /// Owning organization identifier.
    pub org_id: OrgId,
    /// Pull request metadata.
    pub pr: PullRequestFacts,
    /// Free-text change description.
    pub description: String,
    /// Extracted ticket references.
    pub ticket_refs: Vec<String>,
    /// Extracted chat-thread references.
    pub chat_refs: Vec<String>,
    /// Files changed by the pull request.
    pub files_changed: Vec<String>,
    /// Ordered review list.
    pub reviews: Vec<Review>,
    /// Ordered comment list.
    pub comments: Vec<Comment>,
    /// Optional qualitative judgments.
    pub judgments: QualitativeJudgments,
    /// Evidence completeness score (0-100).
    pub score: u8,
    /// Lifecycle status.
    pub status: RecordStatus,
    /// Owned gap set.
    pub gaps: Vec<Gap>,
}

impl EvidenceRecord {
    /// Returns `true` when the record carries a non-blank description.
    #[must_use]
    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }

    /// Returns the distinct logins that approved the change.
    #[must_use]
    pub fn approver_logins(&self) -> Vec<&str> {
        let mut approvers: Vec<&str> = self
            .reviews
            .iter()
            .filter(|review| review.state == ReviewState::Approved)
            .map(|review| review.author.as_str())
            .collect();
        approvers.sort_unstable();
        approvers.dedup();
        approvers
    }

    /// Returns the number of distinct approving reviewers.
    #[must_use]
    pub fn approved_review_count(&self) -> u32 {
        u32::try_from(self.approver_logins().len()).unwrap_or(u32::MAX)
    }

    /// Returns `true` when the author appears among the approvers.
    #[must_use]
    pub fn has_self_approval(&self) -> bool {
        self.approver_logins().contains(&self.pr.author.as_str())
    }
}
