// crates/evidence-ledger-core/src/core/gap.rs
// ============================================================================
// Module: Evidence Ledger Gap Detector
// Description: Typed, severity-ranked documentation deficiency detection.
// Purpose: Map evidence signals and policy to an ordered gap list.
// Dependencies: crate::core::{policy, score}, serde
// ============================================================================

//! ## Overview
//! Gap detection is a pure function: each rule is independent, fires at most
//! once, and appends in a fixed order, so no deduplication is needed. The
//! resulting list is the complete gap set for the record; recalculation
//! replaces any previously stored gaps with this output.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::policy::EvidencePolicy;
use crate::core::score::ScoreInput;

// ============================================================================
// SECTION: Gap Types
// ============================================================================

/// Gap classification.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapType {
    /// Required description is missing.
    MissingDescription,
    /// Required ticket link is missing.
    MissingTicket,
    /// No review exists.
    MissingReview,
    /// Approving reviews fall short of policy.
    MissingApproval,
    /// Description exists but is too short to explain the change.
    InsufficientContext,
    /// No testing evidence was supplied.
    NoTestingEvidence,
}

impl GapType {
    /// Returns a stable display label for the gap type.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MissingDescription => "missing description",
            Self::MissingTicket => "missing ticket",
            Self::MissingReview => "missing review",
            Self::MissingApproval => "missing approval",
            Self::InsufficientContext => "insufficient context",
            Self::NoTestingEvidence => "no testing evidence",
        }
    }
}

/// Gap severity ranking.
///
/// # Invariants
/// - Ordering is ascending: `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapSeverity {
    /// Minor deficiency.
    Low,
    /// Notable deficiency.
    Medium,
    /// Serious deficiency.
    High,
    /// Blocking deficiency.
    Critical,
}

impl GapSeverity {
    /// Returns a stable display label for the severity.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

/// A specific documentation deficiency with remediation guidance.
///
/// # Invariants
/// - `resolved` does not survive recalculation; the gap set is always the
///   detector output for the current evidence and policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gap {
    /// Gap classification.
    pub gap_type: GapType,
    /// Severity ranking.
    pub severity: GapSeverity,
    /// Human-readable description of the deficiency.
    pub message: String,
    /// Remediation suggestion.
    pub suggestion: String,
    /// Whether a human marked the gap addressed.
    pub resolved: bool,
}

impl Gap {
    /// Creates an unresolved gap.
    #[must_use]
    pub fn new(
        gap_type: GapType,
        severity: GapSeverity,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            gap_type,
            severity,
            message: message.into(),
            suggestion: suggestion.into(),
            resolved: false,
        }
    }
}

// ============================================================================
// SECTION: Gap Detection
// ============================================================================

/// Description length below which context is considered insufficient.
pub const CONTEXT_MIN_LEN: usize = 50;

/// Approval shortfall at which the missing-approval gap escalates to high.
pub const APPROVAL_SHORTFALL_HIGH: u32 = 2;

/// Detects documentation gaps for the given signals and policy.
///
/// Rules are independent and evaluated in a fixed order; each fires at most
/// once. Deterministic and pure.
#[must_use]
pub fn detect_gaps(input: &ScoreInput, policy: &EvidencePolicy) -> Vec<Gap> {
    let mut gaps = Vec::new();

    if !input.has_description && policy.require_description {
        gaps.push(Gap::new(
            GapType::MissingDescription,
            GapSeverity::High,
            "Pull request has no description",
            "Add a description explaining what changed and why",
        ));
    } else if input.has_description && input.description_length < CONTEXT_MIN_LEN {
        gaps.push(Gap::new(
            GapType::InsufficientContext,
            GapSeverity::Low,
            "Description is too short to explain the change",
            "Expand the description with motivation and impact",
        ));
    }

    if input.ticket_count == 0 && policy.require_ticket_link {
        gaps.push(Gap::new(
            GapType::MissingTicket,
            GapSeverity::Medium,
            "No ticket is linked to this change",
            "Link the ticket that motivated this change",
        ));
    }

    if input.review_count == 0 {
        gaps.push(Gap::new(
            GapType::MissingReview,
            GapSeverity::Medium,
            "No review has been recorded",
            "Request a review before merging",
        ));
    }

    if input.approved_review_count < policy.min_reviewers {
        let shortfall = policy.min_reviewers - input.approved_review_count;
        let severity = if shortfall >= APPROVAL_SHORTFALL_HIGH {
            GapSeverity::High
        } else {
            GapSeverity::Medium
        };
        let plural = if shortfall == 1 { "approval" } else { "approvals" };
        gaps.push(Gap::new(
            GapType::MissingApproval,
            severity,
            format!("Needs {shortfall} more {plural}"),
            "Request approval from the required reviewers",
        ));
    }

    gaps
}
