// crates/evidence-ledger-core/src/core/compliance.rs
// ============================================================================
// Module: Evidence Ledger Compliance Evaluator
// Description: Control-by-control evaluation of evidence against frameworks.
// Purpose: Produce per-control and per-framework compliance results.
// Dependencies: crate::core::evidence, evidence-ledger-frameworks, serde
// ============================================================================

//! ## Overview
//! Compliance evaluation checks one evidence snapshot against each enabled
//! framework independently. Every control declares requirement flags; the
//! evaluator turns each declared flag into a requirement check, derives the
//! control status (fail on any unmet required check, warning on unmet
//! advisory checks, pass otherwise), and rolls controls up into a framework
//! score with fixed status thresholds. Unknown qualitative judgments degrade
//! advisory checks, never required ones.

// ============================================================================
// SECTION: Imports
// ============================================================================

use evidence_ledger_frameworks::ComplianceFramework;
use evidence_ledger_frameworks::Control;
use evidence_ledger_frameworks::FrameworkCode;
use serde::Deserialize;
use serde::Serialize;

use crate::core::evidence::AuditReadiness;
use crate::core::evidence::EvidenceRecord;
use crate::core::evidence::Judgment;
use crate::core::evidence::QualitativeJudgments;

// ============================================================================
// SECTION: Thresholds
// ============================================================================

/// Framework score at or above which the framework is compliant.
pub const COMPLIANT_THRESHOLD: u8 = 80;

/// Framework score at or above which the framework is partially compliant.
pub const PARTIAL_THRESHOLD: u8 = 50;

// ============================================================================
// SECTION: Compliance Snapshot
// ============================================================================

/// Evidence snapshot consumed by compliance evaluation.
///
/// # Invariants
/// - Values are extracted from a single record state; self-approval is a
///   standalone flag, never folded into the approval count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceSnapshot {
    /// Whether a non-blank description exists.
    pub has_description: bool,
    /// Description length in characters.
    pub description_length: usize,
    /// Number of linked tickets.
    pub ticket_count: u32,
    /// Number of reviews of any state.
    pub review_count: u32,
    /// Number of distinct approving reviewers.
    pub approved_review_count: u32,
    /// Whether the author appears among the approvers.
    pub has_self_approval: bool,
    /// Number of files changed.
    pub files_changed: u32,
    /// Optional qualitative judgments.
    pub judgments: QualitativeJudgments,
}

impl ComplianceSnapshot {
    /// Extracts a compliance snapshot from a record's current state.
    #[must_use]
    pub fn from_record(record: &EvidenceRecord) -> Self {
        Self {
            has_description: record.has_description(),
            description_length: record.description.chars().count(),
            ticket_count: u32::try_from(record.ticket_refs.len()).unwrap_or(u32::MAX),
            review_count: u32::try_from(record.reviews.len()).unwrap_or(u32::MAX),
            approved_review_count: record.approved_review_count(),
            has_self_approval: record.has_self_approval(),
            files_changed: u32::try_from(record.files_changed.len()).unwrap_or(u32::MAX),
            judgments: record.judgments,
        }
    }

    /// Returns `true` when the risk-assessment advisory signal is satisfied.
    ///
    /// The signal is the audit-readiness judgment: known and not `NotReady`.
    /// Unknown judgments leave the advisory unmet but never fail a control.
    #[must_use]
    pub const fn risk_assessed(&self) -> bool {
        match self.judgments.audit_readiness {
            Judgment::Known(AuditReadiness::Ready | AuditReadiness::NeedsWork) => true,
            Judgment::Known(AuditReadiness::NotReady) | Judgment::Unknown => false,
        }
    }
}

// ============================================================================
// SECTION: Control Results
// ============================================================================

/// Outcome of a single requirement check within a control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementCheck {
    /// Stable requirement name.
    pub name: String,
    /// Whether the requirement is required (vs. advisory).
    pub required: bool,
    /// Whether the snapshot satisfies the requirement.
    pub satisfied: bool,
}

/// Control evaluation status.
///
/// # Invariants
/// - `Fail` iff any required check is unmet; `Warning` iff all required
///   checks are met and an advisory check is unmet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlStatus {
    /// All declared checks are satisfied.
    Pass,
    /// Required checks met, at least one advisory check unmet.
    Warning,
    /// At least one required check unmet.
    Fail,
}

/// Evaluation result for a single control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlResult {
    /// Control identifier.
    pub control_id: String,
    /// Control name.
    pub name: String,
    /// Control category.
    pub category: String,
    /// Evaluation status.
    pub status: ControlStatus,
    /// Requirement checklist in declaration order.
    pub checks: Vec<RequirementCheck>,
    /// Remediation recommendation for fail/warning results.
    pub recommendation: Option<String>,
}

// ============================================================================
// SECTION: Framework Results
// ============================================================================

/// Framework-level compliance status buckets.
///
/// # Invariants
/// - Buckets are monotonic with score: `Compliant` requires score >= 80,
///   `Partial` requires score >= 50.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    /// Framework score at or above the compliant threshold.
    Compliant,
    /// Framework score at or above the partial threshold.
    Partial,
    /// Framework score below the partial threshold.
    NonCompliant,
}

/// Evaluation result for one framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkResult {
    /// Framework code.
    pub code: FrameworkCode,
    /// Framework name.
    pub name: String,
    /// Framework display icon.
    pub icon: String,
    /// Overall status bucket.
    pub status: OverallStatus,
    /// Framework score: `round(100 * passed / total)`.
    pub score: u8,
    /// Ordered control results.
    pub controls: Vec<ControlResult>,
}

// ============================================================================
// SECTION: Control Evaluation
// ============================================================================

/// Evaluates a single control against the snapshot.
#[must_use]
pub fn evaluate_control(control: &Control, snapshot: &ComplianceSnapshot) -> ControlResult {
    let mut checks = Vec::new();

    if control.requires_approval {
        checks.push(RequirementCheck {
            name: "approval present".to_string(),
            required: true,
            satisfied: snapshot.approved_review_count > 0,
        });
    }
    if control.requires_review {
        checks.push(RequirementCheck {
            name: "review present".to_string(),
            required: true,
            satisfied: snapshot.review_count > 0,
        });
    }
    if control.requires_ticket_link {
        checks.push(RequirementCheck {
            name: "ticket linked".to_string(),
            required: true,
            satisfied: snapshot.ticket_count > 0,
        });
    }
    if control.requires_description {
        checks.push(RequirementCheck {
            name: "description present".to_string(),
            required: true,
            satisfied: snapshot.has_description,
        });
    }
    if control.min_reviewers > 0 {
        checks.push(RequirementCheck {
            name: "minimum reviewers".to_string(),
            required: true,
            satisfied: snapshot.approved_review_count >= control.min_reviewers,
        });
    }
    if control.requires_risk_assessment {
        checks.push(RequirementCheck {
            name: "risk assessment".to_string(),
            required: false,
            satisfied: snapshot.risk_assessed(),
        });
    }
    if control.requires_approval {
        // Segregation of duties: a lone self-approval is advisory-unmet.
        checks.push(RequirementCheck {
            name: "independent approval".to_string(),
            required: false,
            satisfied: !(snapshot.has_self_approval && snapshot.approved_review_count <= 1),
        });
    }

    let required_unmet = checks.iter().any(|check| check.required && !check.satisfied);
    let advisory_unmet = checks.iter().any(|check| !check.required && !check.satisfied);
    let status = if required_unmet {
        ControlStatus::Fail
    } else if advisory_unmet {
        ControlStatus::Warning
    } else {
        ControlStatus::Pass
    };

    let recommendation = match status {
        ControlStatus::Pass => None,
        ControlStatus::Warning | ControlStatus::Fail => Some(recommendation_for(control, &checks)),
    };

    ControlResult {
        control_id: control.id.clone(),
        name: control.name.clone(),
        category: control.category.clone(),
        status,
        checks,
        recommendation,
    }
}

/// Builds a remediation recommendation from the unmet checks.
fn recommendation_for(control: &Control, checks: &[RequirementCheck]) -> String {
    let unmet: Vec<&str> =
        checks.iter().filter(|check| !check.satisfied).map(|check| check.name.as_str()).collect();
    format!("{}: address {}", control.id, unmet.join(", "))
}

// ============================================================================
// SECTION: Framework Evaluation
// ============================================================================

/// Evaluates one framework against the snapshot.
#[must_use]
pub fn evaluate_framework(
    framework: &ComplianceFramework,
    snapshot: &ComplianceSnapshot,
) -> FrameworkResult {
    let controls: Vec<ControlResult> = framework
        .controls
        .iter()
        .map(|control| evaluate_control(control, snapshot))
        .collect();

    let total = controls.len();
    let passed = controls.iter().filter(|result| result.status == ControlStatus::Pass).count();
    let score = framework_score(passed, total);
    let status = if score >= COMPLIANT_THRESHOLD {
        OverallStatus::Compliant
    } else if score >= PARTIAL_THRESHOLD {
        OverallStatus::Partial
    } else {
        OverallStatus::NonCompliant
    };

    FrameworkResult {
        code: framework.code.clone(),
        name: framework.name.clone(),
        icon: framework.icon.clone(),
        status,
        score,
        controls,
    }
}

/// Evaluates every enabled framework, resolving codes against the catalog.
///
/// Unknown codes are skipped; evaluation order follows the enabled list.
#[must_use]
pub fn evaluate_frameworks(
    catalog: &[ComplianceFramework],
    enabled: &[FrameworkCode],
    snapshot: &ComplianceSnapshot,
) -> Vec<FrameworkResult> {
    enabled
        .iter()
        .filter_map(|code| catalog.iter().find(|framework| framework.code == *code))
        .map(|framework| evaluate_framework(framework, snapshot))
        .collect()
}

/// Computes `round(100 * passed / total)` with half-up integer rounding.
fn framework_score(passed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let scaled = (passed * 100 + total / 2) / total;
    u8::try_from(scaled).unwrap_or(100)
}
