// crates/evidence-ledger-frameworks/tests/catalog.rs
// ============================================================================
// Module: Framework Catalog Tests
// Description: Tests for the builtin framework catalog and code lookup.
// ============================================================================
//! ## Overview
//! Validates catalog integrity: unique codes, unique control ids, and stable
//! lookup behavior.

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

use evidence_ledger_frameworks::FrameworkCode;
use evidence_ledger_frameworks::builtin_frameworks;
use evidence_ledger_frameworks::find_framework;

// ============================================================================
// SECTION: Catalog Integrity
// ============================================================================

/// Tests every builtin framework carries controls and display metadata.
#[test]
fn test_builtin_frameworks_are_well_formed() {
    let frameworks = builtin_frameworks();
    assert_eq!(frameworks.len(), 4);
    for framework in &frameworks {
        assert!(!framework.controls.is_empty());
        assert!(!framework.name.is_empty());
        assert!(!framework.icon.is_empty());
    }
}

/// Tests framework codes are unique across the catalog.
#[test]
fn test_framework_codes_are_unique() {
    let frameworks = builtin_frameworks();
    for (index, framework) in frameworks.iter().enumerate() {
        for other in &frameworks[index + 1 ..] {
            assert_ne!(framework.code, other.code);
        }
    }
}

/// Tests control ids are unique within each framework.
#[test]
fn test_control_ids_are_unique_within_framework() {
    for framework in builtin_frameworks() {
        for (index, control) in framework.controls.iter().enumerate() {
            for other in &framework.controls[index + 1 ..] {
                assert_ne!(control.id, other.id);
            }
        }
    }
}

/// Tests a min-reviewers threshold implies the approval requirement.
#[test]
fn test_min_reviewers_implies_approval() {
    for framework in builtin_frameworks() {
        for control in &framework.controls {
            if control.min_reviewers > 0 {
                assert!(
                    control.requires_approval,
                    "control {} sets min_reviewers without requiring approval",
                    control.id
                );
            }
        }
    }
}

// ============================================================================
// SECTION: Lookup
// ============================================================================

/// Tests lookup finds each builtin framework by code.
#[test]
fn test_find_framework_by_code() {
    for framework in builtin_frameworks() {
        let found = find_framework(&framework.code).unwrap();
        assert_eq!(found, framework);
    }
}

/// Tests lookup of an unknown code yields nothing.
#[test]
fn test_find_unknown_code_is_none() {
    assert!(find_framework(&FrameworkCode::new("pci-dss")).is_none());
}
