// crates/evidence-ledger-core/src/core/score.rs
// ============================================================================
// Module: Evidence Ledger Score Calculator
// Description: Deterministic additive evidence completeness scoring.
// Purpose: Map evidence signals to a 0-100 score with per-signal breakdown.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Scoring is a pure function over extracted evidence signals. Contributions
//! are additive and capped at 100; absent signals contribute zero. There are
//! no negative contributions in this layer.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Scoring Constants
// ============================================================================

/// Description length above which the base description points apply.
pub const DESCRIPTION_MIN_LEN: usize = 10;

/// Description length above which the detailed-description bonus applies.
pub const DESCRIPTION_DETAIL_LEN: usize = 100;

/// Maximum total score.
pub const MAX_SCORE: u8 = 100;

// ============================================================================
// SECTION: Score Input
// ============================================================================

/// Evidence signals consumed by scoring and gap detection.
///
/// # Invariants
/// - Values are snapshots extracted from a single record state; callers must
///   not mix signals from different recalculation passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreInput {
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
    /// Whether any chat-thread reference exists.
    pub has_chat_context: bool,
}

// ============================================================================
// SECTION: Score Breakdown
// ============================================================================

/// Per-signal score contributions plus the capped total.
///
/// # Invariants
/// - `total == min(description + tickets + reviews + chat, 100)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Description contribution (0, 15, or 25).
    pub description: u8,
    /// Ticket contribution (0 or 25).
    pub tickets: u8,
    /// Review contribution (0, 15, 20, or 35).
    pub reviews: u8,
    /// Chat-context contribution (0 or 10).
    pub chat: u8,
    /// Capped total score.
    pub total: u8,
}

// ============================================================================
// SECTION: Score Calculator
// ============================================================================

/// Computes the evidence completeness score for the given signals.
///
/// Deterministic and pure: repeated calls with equal input yield equal output.
#[must_use]
pub fn calculate_score(input: &ScoreInput) -> ScoreBreakdown {
    let mut description: u8 = 0;
    if input.has_description && input.description_length > DESCRIPTION_MIN_LEN {
        description += 15;
        if input.description_length > DESCRIPTION_DETAIL_LEN {
            description += 10;
        }
    }

    let tickets: u8 = if input.ticket_count > 0 { 25 } else { 0 };

    let mut reviews: u8 = 0;
    if input.review_count > 0 {
        reviews += 15;
    }
    if input.approved_review_count > 0 {
        reviews += 20;
    }

    let chat: u8 = if input.has_chat_context { 10 } else { 0 };

    let sum = u16::from(description) + u16::from(tickets) + u16::from(reviews) + u16::from(chat);
    let total = u8::try_from(sum.min(u16::from(MAX_SCORE))).unwrap_or(MAX_SCORE);

    ScoreBreakdown {
        description,
        tickets,
        reviews,
        chat,
        total,
    }
}
