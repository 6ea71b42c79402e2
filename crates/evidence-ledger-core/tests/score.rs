// crates/evidence-ledger-core/tests/score.rs
// ============================================================================
// Module: Score Calculator Tests
// Description: Tests for deterministic additive evidence scoring.
// ============================================================================
//! ## Overview
//! Validates per-signal contributions, the 100-point cap, and determinism.

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

use evidence_ledger_core::ScoreInput;
use evidence_ledger_core::calculate_score;

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

// ============================================================================
// SECTION: Signal Contributions
// ============================================================================

/// Tests the worked example: detailed description, ticket, approved review.
#[test]
fn test_full_evidence_scores_eighty_five() {
    let input = ScoreInput {
        has_description: true,
        description_length: 120,
        ticket_count: 1,
        review_count: 1,
        approved_review_count: 1,
        has_chat_context: false,
    };
    let breakdown = calculate_score(&input);
    assert_eq!(breakdown.description, 25);
    assert_eq!(breakdown.tickets, 25);
    assert_eq!(breakdown.reviews, 35);
    assert_eq!(breakdown.chat, 0);
    assert_eq!(breakdown.total, 85);
}

/// Tests the worked example: review only, nothing else.
#[test]
fn test_review_only_scores_fifteen() {
    let input = ScoreInput {
        review_count: 1,
        ..empty_input()
    };
    let breakdown = calculate_score(&input);
    assert_eq!(breakdown.total, 15);
}

/// Tests absent signals contribute zero.
#[test]
fn test_empty_evidence_scores_zero() {
    let breakdown = calculate_score(&empty_input());
    assert_eq!(breakdown.total, 0);
    assert_eq!(breakdown.description, 0);
    assert_eq!(breakdown.tickets, 0);
    assert_eq!(breakdown.reviews, 0);
    assert_eq!(breakdown.chat, 0);
}

/// Tests the description length thresholds are strict.
#[test]
fn test_description_thresholds_are_strict() {
    let short = calculate_score(&ScoreInput {
        has_description: true,
        description_length: 10,
        ..empty_input()
    });
    assert_eq!(short.description, 0);

    let base = calculate_score(&ScoreInput {
        has_description: true,
        description_length: 11,
        ..empty_input()
    });
    assert_eq!(base.description, 15);

    let boundary = calculate_score(&ScoreInput {
        has_description: true,
        description_length: 100,
        ..empty_input()
    });
    assert_eq!(boundary.description, 15);

    let detailed = calculate_score(&ScoreInput {
        has_description: true,
        description_length: 101,
        ..empty_input()
    });
    assert_eq!(detailed.description, 25);
}

/// Tests multiple tickets earn no bonus over one.
#[test]
fn test_multiple_tickets_flat_contribution() {
    let one = calculate_score(&ScoreInput {
        ticket_count: 1,
        ..empty_input()
    });
    let many = calculate_score(&ScoreInput {
        ticket_count: 7,
        ..empty_input()
    });
    assert_eq!(one.tickets, 25);
    assert_eq!(many.tickets, 25);
}

/// Tests review and approval contributions stack.
#[test]
fn test_review_and_approval_stack() {
    let breakdown = calculate_score(&ScoreInput {
        review_count: 2,
        approved_review_count: 1,
        ..empty_input()
    });
    assert_eq!(breakdown.reviews, 35);
}

// ============================================================================
// SECTION: Cap and Determinism
// ============================================================================

/// Tests the total is capped at one hundred.
#[test]
fn test_total_is_capped() {
    let input = ScoreInput {
        has_description: true,
        description_length: 5_000,
        ticket_count: 10,
        review_count: 10,
        approved_review_count: 10,
        has_chat_context: true,
    };
    let breakdown = calculate_score(&input);
    assert_eq!(breakdown.total, 95);
    assert!(breakdown.total <= 100);
}

/// Tests repeated calls yield identical output.
#[test]
fn test_scoring_is_deterministic() {
    let input = ScoreInput {
        has_description: true,
        description_length: 64,
        ticket_count: 2,
        review_count: 3,
        approved_review_count: 2,
        has_chat_context: true,
    };
    assert_eq!(calculate_score(&input), calculate_score(&input));
}
