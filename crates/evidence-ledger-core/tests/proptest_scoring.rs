// crates/evidence-ledger-core/tests/proptest_scoring.rs
// ============================================================================
// Module: Scoring Property-Based Tests
// Description: Property tests for score, gap, and compliance invariants.
// Purpose: Detect panics and invariant violations across wide input ranges.
// ============================================================================

//! Property-based tests for scoring and evaluation invariants.

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
    reason = "Test-only assertions and helpers are permitted."
)]

use evidence_ledger_core::COMPLIANT_THRESHOLD;
use evidence_ledger_core::ComplianceSnapshot;
use evidence_ledger_core::EvidencePolicy;
use evidence_ledger_core::OverallStatus;
use evidence_ledger_core::PARTIAL_THRESHOLD;
use evidence_ledger_core::QualitativeJudgments;
use evidence_ledger_core::ScoreInput;
use evidence_ledger_core::calculate_score;
use evidence_ledger_core::detect_gaps;
use evidence_ledger_core::evaluate_framework;
use evidence_ledger_frameworks::builtin_frameworks;
use proptest::prelude::*;

fn score_input_strategy() -> impl Strategy<Value = ScoreInput> {
    (any::<bool>(), 0_usize .. 10_000, 0_u32 .. 64, 0_u32 .. 64, 0_u32 .. 64, any::<bool>())
        .prop_map(
            |(
                has_description,
                description_length,
                ticket_count,
                review_count,
                approved_review_count,
                has_chat_context,
            )| {
                ScoreInput {
                    has_description,
                    description_length,
                    ticket_count,
                    review_count,
                    approved_review_count,
                    has_chat_context,
                }
            },
        )
}

fn policy_strategy() -> impl Strategy<Value = EvidencePolicy> {
    (any::<bool>(), any::<bool>(), 0_u32 .. 8).prop_map(
        |(require_description, require_ticket_link, min_reviewers)| EvidencePolicy {
            require_description,
            require_ticket_link,
            min_reviewers,
        },
    )
}

fn compliance_snapshot_strategy() -> impl Strategy<Value = ComplianceSnapshot> {
    (score_input_strategy(), any::<bool>(), 0_u32 .. 512).prop_map(
        |(input, has_self_approval, files_changed)| ComplianceSnapshot {
            has_description: input.has_description,
            description_length: input.description_length,
            ticket_count: input.ticket_count,
            review_count: input.review_count,
            approved_review_count: input.approved_review_count,
            has_self_approval,
            files_changed,
            judgments: QualitativeJudgments::default(),
        },
    )
}

proptest! {
    #[test]
    fn score_is_bounded_and_consistent(input in score_input_strategy()) {
        let breakdown = calculate_score(&input);
        prop_assert!(breakdown.total <= 100);
        let sum = u16::from(breakdown.description)
            + u16::from(breakdown.tickets)
            + u16::from(breakdown.reviews)
            + u16::from(breakdown.chat);
        prop_assert_eq!(u16::from(breakdown.total), sum.min(100));
    }

    #[test]
    fn score_is_deterministic(input in score_input_strategy()) {
        prop_assert_eq!(calculate_score(&input), calculate_score(&input));
    }

    #[test]
    fn gap_detection_is_deterministic(
        input in score_input_strategy(),
        policy in policy_strategy(),
    ) {
        prop_assert_eq!(detect_gaps(&input, &policy), detect_gaps(&input, &policy));
    }

    #[test]
    fn gap_types_never_repeat(
        input in score_input_strategy(),
        policy in policy_strategy(),
    ) {
        let gaps = detect_gaps(&input, &policy);
        for (index, gap) in gaps.iter().enumerate() {
            for other in &gaps[index + 1 ..] {
                prop_assert_ne!(gap.gap_type, other.gap_type);
            }
        }
    }

    #[test]
    fn framework_scores_match_status_buckets(snapshot in compliance_snapshot_strategy()) {
        for framework in builtin_frameworks() {
            let result = evaluate_framework(&framework, &snapshot);
            prop_assert!(result.score <= 100);
            match result.status {
                OverallStatus::Compliant => prop_assert!(result.score >= COMPLIANT_THRESHOLD),
                OverallStatus::Partial => {
                    prop_assert!(result.score >= PARTIAL_THRESHOLD);
                    prop_assert!(result.score < COMPLIANT_THRESHOLD);
                }
                OverallStatus::NonCompliant => prop_assert!(result.score < PARTIAL_THRESHOLD),
            }
        }
    }
}
