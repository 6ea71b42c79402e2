// crates/evidence-ledger-core/tests/gaps.rs
// ============================================================================
// Module: Gap Detector Tests
// Description: Tests for typed, severity-ranked gap detection rules.
// ============================================================================
//! ## Overview
//! Validates each detection rule independently, rule ordering, mutual
//! exclusivity, and policy-driven suppression.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use evidence_ledger_core::EvidencePolicy;
use evidence_ledger_core::GapSeverity;
use evidence_ledger_core::GapType;
use evidence_ledger_core::ScoreInput;
use evidence_ledger_core::detect_gaps;

/// Builds a score input with every signal absent.
fn empty_input() -> ScoreInput {
    ScoreInput {
        has_description: false,
        description_length: 0,
        ticket_count: 0,
        review_count: 0,
        approved_review_count: 0,
        has_chat_context: false,
    }
}

/// Builds a score input that satisfies the default policy.
fn complete_input() -> ScoreInput {
    ScoreInput {
        has_description: true,
        description_length: 200,
        ticket_count: 1,
        review_count: 2,
        approved_review_count: 1,
        has_chat_context: true,
    }
}

// ============================================================================
// SECTION: Detection Rules
// ============================================================================

/// Tests the worked example: bare review under the default policy.
#[test]
fn test_review_only_yields_three_gaps() {
    let input = ScoreInput {
        review_count: 1,
        ..empty_input()
    };
    let gaps = detect_gaps(&input, &EvidencePolicy::default());

    assert_eq!(gaps.len(), 3);
    assert_eq!(gaps[0].gap_type, GapType::MissingDescription);
    assert_eq!(gaps[0].severity, GapSeverity::High);
    assert_eq!(gaps[1].gap_type, GapType::MissingTicket);
    assert_eq!(gaps[1].severity, GapSeverity::Medium);
    assert_eq!(gaps[2].gap_type, GapType::MissingApproval);
    assert_eq!(gaps[2].severity, GapSeverity::Medium);
    assert_eq!(gaps[2].message, "Needs 1 more approval");
}

/// Tests complete evidence yields no gaps.
#[test]
fn test_complete_evidence_yields_no_gaps() {
    let gaps = detect_gaps(&complete_input(), &EvidencePolicy::default());
    assert!(gaps.is_empty());
}

/// Tests a short description yields insufficient context, not missing description.
#[test]
fn test_short_description_is_insufficient_context() {
    let input = ScoreInput {
        has_description: true,
        description_length: 20,
        ..complete_input()
    };
    let gaps = detect_gaps(&input, &EvidencePolicy::default());
    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].gap_type, GapType::InsufficientContext);
    assert_eq!(gaps[0].severity, GapSeverity::Low);
    assert!(!gaps.iter().any(|gap| gap.gap_type == GapType::MissingDescription));
}

/// Tests the approval shortfall escalates to high severity at two.
#[test]
fn test_approval_shortfall_escalates() {
    let policy = EvidencePolicy {
        min_reviewers: 3,
        ..EvidencePolicy::default()
    };
    let input = ScoreInput {
        approved_review_count: 1,
        ..complete_input()
    };
    let gaps = detect_gaps(&input, &policy);
    let approval =
        gaps.iter().find(|gap| gap.gap_type == GapType::MissingApproval).unwrap();
    assert_eq!(approval.severity, GapSeverity::High);
    assert_eq!(approval.message, "Needs 2 more approvals");
}

/// Tests a shortfall of one stays medium severity.
#[test]
fn test_single_shortfall_stays_medium() {
    let policy = EvidencePolicy {
        min_reviewers: 2,
        ..EvidencePolicy::default()
    };
    let input = ScoreInput {
        approved_review_count: 1,
        ..complete_input()
    };
    let gaps = detect_gaps(&input, &policy);
    let approval =
        gaps.iter().find(|gap| gap.gap_type == GapType::MissingApproval).unwrap();
    assert_eq!(approval.severity, GapSeverity::Medium);
}

// ============================================================================
// SECTION: Policy Suppression
// ============================================================================

/// Tests a permissive policy suppresses description and ticket gaps.
#[test]
fn test_permissive_policy_suppresses_gaps() {
    let policy = EvidencePolicy {
        require_description: false,
        require_ticket_link: false,
        min_reviewers: 0,
    };
    let input = ScoreInput {
        review_count: 1,
        ..empty_input()
    };
    let gaps = detect_gaps(&input, &policy);
    assert!(gaps.is_empty());
}

/// Tests the missing-review rule applies regardless of policy.
#[test]
fn test_missing_review_is_policy_independent() {
    let policy = EvidencePolicy {
        require_description: false,
        require_ticket_link: false,
        min_reviewers: 0,
    };
    let gaps = detect_gaps(&empty_input(), &policy);
    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].gap_type, GapType::MissingReview);
}

// ============================================================================
// SECTION: Determinism
// ============================================================================

/// Tests repeated detection yields identical output.
#[test]
fn test_detection_is_deterministic() {
    let input = ScoreInput {
        review_count: 1,
        ..empty_input()
    };
    let policy = EvidencePolicy::default();
    assert_eq!(detect_gaps(&input, &policy), detect_gaps(&input, &policy));
}

/// Tests every detected gap starts unresolved with a suggestion.
#[test]
fn test_gaps_carry_suggestions_and_start_unresolved() {
    let gaps = detect_gaps(&empty_input(), &EvidencePolicy::default());
    assert!(!gaps.is_empty());
    for gap in &gaps {
        assert!(!gap.resolved);
        assert!(!gap.suggestion.is_empty());
        assert!(!gap.message.is_empty());
    }
}
