// crates/evidence-ledger-frameworks/src/lib.rs
// ============================================================================
// Module: Evidence Ledger Frameworks Library
// Description: Compliance framework and control definitions with a builtin catalog.
// Purpose: Provide stable framework/control types consumed by the core evaluator.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Compliance frameworks are externally defined checklists: each framework is
//! an ordered list of named controls carrying boolean requirement flags. The
//! core evaluator checks the same evidence snapshot against every enabled
//! framework independently; nothing in these definitions inspects evidence
//! itself. The builtin catalog ships SOC 2, ISO 27001, SOX, and HIPAA
//! change-management controls.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod catalog;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::builtin_frameworks;
pub use catalog::find_framework;
pub use catalog::hipaa;
pub use catalog::iso27001;
pub use catalog::soc2;
pub use catalog::sox;

// ============================================================================
// SECTION: Framework Code
// ============================================================================

/// Short, stable framework code used to enable frameworks per organization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameworkCode(String);

impl FrameworkCode {
    /// Creates a new framework code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FrameworkCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for FrameworkCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for FrameworkCode {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Controls
// ============================================================================

/// A single compliance control with declarative requirement flags.
///
/// # Invariants
/// - `id` is unique within its framework.
/// - Flags are declarative; evaluation semantics live in the core evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
    /// Stable control identifier (for example `CC8.1`).
    pub id: String,
    /// Human-readable control name.
    pub name: String,
    /// Control category within the framework.
    pub category: String,
    /// Requires at least one approving review.
    pub requires_approval: bool,
    /// Requires at least one review of any state.
    pub requires_review: bool,
    /// Requires at least one linked ticket.
    pub requires_ticket_link: bool,
    /// Requires a non-empty change description.
    pub requires_description: bool,
    /// Advisory: expects a risk assessment signal to be present.
    pub requires_risk_assessment: bool,
    /// Minimum number of distinct approving reviewers.
    pub min_reviewers: u32,
}

// ============================================================================
// SECTION: Frameworks
// ============================================================================

/// A compliance framework: an ordered list of controls under a stable code.
///
/// # Invariants
/// - `controls` is non-empty and ordered as published by the framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceFramework {
    /// Short framework code (for example `soc2`).
    pub code: FrameworkCode,
    /// Full framework name.
    pub name: String,
    /// Display icon for rendering surfaces.
    pub icon: String,
    /// Ordered control list.
    pub controls: Vec<Control>,
}
