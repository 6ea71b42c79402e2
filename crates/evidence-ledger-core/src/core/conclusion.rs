// crates/evidence-ledger-core/src/core/conclusion.rs
// ============================================================================
// Module: Evidence Ledger Check Conclusion Policy
// Description: Ternary pass/neutral/fail signal for external status checks.
// Purpose: Map score, gaps, and audit readiness to a reportable conclusion.
// Dependencies: crate::core::{evidence, gap}, serde
// ============================================================================

//! ## Overview
//! The check conclusion is the only externally rendered signal the core
//! produces: a ternary verdict plus short title and summary text for the
//! collaborating check-reporting surface. The mapping is a pure function of
//! the score, the unresolved gap severities, and the optional audit-readiness
//! judgment.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write as _;

use serde::Deserialize;
use serde::Serialize;

use crate::core::evidence::AuditReadiness;
use crate::core::evidence::Judgment;
use crate::core::gap::Gap;
use crate::core::gap::GapSeverity;

// ============================================================================
// SECTION: Thresholds
// ============================================================================

/// Score below which the conclusion is failure.
pub const FAILURE_SCORE: u8 = 40;

/// Score at or above which the conclusion may be success.
pub const SUCCESS_SCORE: u8 = 60;

// ============================================================================
// SECTION: Conclusion
// ============================================================================

/// Ternary check conclusion.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckConclusion {
    /// Evidence is sufficient.
    Success,
    /// Evidence is incomplete but not blocking.
    Neutral,
    /// Evidence is insufficient.
    Failure,
}

/// Check conclusion with report text for the external check surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    /// Ternary conclusion.
    pub conclusion: CheckConclusion,
    /// Short check title.
    pub title: String,
    /// Markdown summary listing score and unresolved gaps.
    pub summary: String,
}

// ============================================================================
// SECTION: Conclusion Policy
// ============================================================================

/// Derives the check conclusion and report text.
///
/// Pure: failure when the score is below [`FAILURE_SCORE`], any critical gap
/// is present, or audit readiness is `NotReady`; success when the score
/// reaches [`SUCCESS_SCORE`] with no high or critical gap and readiness is
/// not `NotReady`; neutral otherwise. Only unresolved gaps count.
#[must_use]
pub fn conclude_check(
    score: u8,
    gaps: &[Gap],
    audit_readiness: Judgment<AuditReadiness>,
) -> CheckReport {
    let unresolved: Vec<&Gap> = gaps.iter().filter(|gap| !gap.resolved).collect();
    let has_critical = unresolved.iter().any(|gap| gap.severity == GapSeverity::Critical);
    let has_high = unresolved.iter().any(|gap| gap.severity >= GapSeverity::High);
    let not_ready = audit_readiness.known() == Some(&AuditReadiness::NotReady);

    let conclusion = if score < FAILURE_SCORE || has_critical || not_ready {
        CheckConclusion::Failure
    } else if score >= SUCCESS_SCORE && !has_high {
        CheckConclusion::Success
    } else {
        CheckConclusion::Neutral
    };

    let title = match conclusion {
        CheckConclusion::Success => format!("Decision evidence complete ({score}/100)"),
        CheckConclusion::Neutral => format!("Decision evidence partial ({score}/100)"),
        CheckConclusion::Failure => format!("Decision evidence insufficient ({score}/100)"),
    };

    let mut summary = format!("**Evidence score:** {score}/100\n");
    if unresolved.is_empty() {
        summary.push_str("\nNo documentation gaps detected.\n");
    } else {
        summary.push_str("\n**Unresolved gaps:**\n");
        for gap in &unresolved {
            let _ = writeln!(
                summary,
                "- {} [{}]: {}",
                gap.gap_type.label(),
                gap.severity.label(),
                gap.message
            );
        }
    }
    if not_ready {
        summary.push_str("\nAudit readiness judged NOT_READY by the analyzer.\n");
    }

    CheckReport {
        conclusion,
        title,
        summary,
    }
}
