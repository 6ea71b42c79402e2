// crates/evidence-ledger-core/src/core/policy.rs
// ============================================================================
// Module: Evidence Ledger Policy Model
// Description: Per-organization evidence requirements.
// Purpose: Provide the policy inputs consumed by gap detection and recalculation.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Evidence policy captures what an organization requires from change
//! documentation. The defaults are the safe fallback used whenever a policy
//! store cannot supply an organization's settings: recalculation must never
//! fail because policy is missing or malformed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Evidence Policy
// ============================================================================

/// Per-organization evidence requirements.
///
/// # Invariants
/// - Defaults are the strict fallback: description and ticket required,
///   one approving reviewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidencePolicy {
    /// Whether a change description is required.
    pub require_description: bool,
    /// Whether a linked ticket is required.
    pub require_ticket_link: bool,
    /// Minimum number of distinct approving reviewers.
    pub min_reviewers: u32,
}

impl Default for EvidencePolicy {
    fn default() -> Self {
        Self {
            require_description: true,
            require_ticket_link: true,
            min_reviewers: 1,
        }
    }
}
