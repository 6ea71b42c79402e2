// crates/evidence-ledger-frameworks/src/catalog.rs
// ============================================================================
// Module: Builtin Framework Catalog
// Description: SOC 2, ISO 27001, SOX, and HIPAA change-management control sets.
// Purpose: Provide ready-to-enable framework definitions and code lookup.
// Dependencies: crate
// ============================================================================

//! ## Overview
//! Builtin definitions cover the change-management slice of each framework:
//! the controls that can be judged from pull-request evidence alone. Control
//! wording follows the published control identifiers; requirement flags encode
//! what each control demands from the evidence snapshot.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::ComplianceFramework;
use crate::Control;
use crate::FrameworkCode;

// ============================================================================
// SECTION: Builtin Frameworks
// ============================================================================

/// Returns the SOC 2 change-management framework.
#[must_use]
pub fn soc2() -> ComplianceFramework {
    ComplianceFramework {
        code: FrameworkCode::new("soc2"),
        name: "SOC 2 Type II".to_string(),
        icon: "shield-check".to_string(),
        controls: vec![
            Control {
                id: "CC6.1".to_string(),
                name: "Logical access change authorization".to_string(),
                category: "Logical and Physical Access".to_string(),
                requires_approval: true,
                requires_review: true,
                requires_ticket_link: false,
                requires_description: true,
                requires_risk_assessment: false,
                min_reviewers: 1,
            },
            Control {
                id: "CC7.2".to_string(),
                name: "Change monitoring and anomaly detection".to_string(),
                category: "System Operations".to_string(),
                requires_approval: false,
                requires_review: true,
                requires_ticket_link: false,
                requires_description: true,
                requires_risk_assessment: true,
                min_reviewers: 0,
            },
            Control {
                id: "CC8.1".to_string(),
                name: "Change management lifecycle".to_string(),
                category: "Change Management".to_string(),
                requires_approval: true,
                requires_review: true,
                requires_ticket_link: true,
                requires_description: true,
                requires_risk_assessment: false,
                min_reviewers: 1,
            },
        ],
    }
}

/// Returns the ISO 27001 change-management framework.
#[must_use]
pub fn iso27001() -> ComplianceFramework {
    ComplianceFramework {
        code: FrameworkCode::new("iso27001"),
        name: "ISO/IEC 27001:2022".to_string(),
        icon: "globe-lock".to_string(),
        controls: vec![
            Control {
                id: "A.8.32".to_string(),
                name: "Change management".to_string(),
                category: "Technological Controls".to_string(),
                requires_approval: true,
                requires_review: true,
                requires_ticket_link: true,
                requires_description: true,
                requires_risk_assessment: true,
                min_reviewers: 1,
            },
            Control {
                id: "A.5.35".to_string(),
                name: "Independent review of information security".to_string(),
                category: "Organizational Controls".to_string(),
                requires_approval: true,
                requires_review: true,
                requires_ticket_link: false,
                requires_description: false,
                requires_risk_assessment: false,
                min_reviewers: 1,
            },
            Control {
                id: "A.8.15".to_string(),
                name: "Logging of change activity".to_string(),
                category: "Technological Controls".to_string(),
                requires_approval: false,
                requires_review: false,
                requires_ticket_link: true,
                requires_description: true,
                requires_risk_assessment: false,
                min_reviewers: 0,
            },
        ],
    }
}

/// Returns the SOX IT general controls framework.
#[must_use]
pub fn sox() -> ComplianceFramework {
    ComplianceFramework {
        code: FrameworkCode::new("sox"),
        name: "Sarbanes-Oxley ITGC".to_string(),
        icon: "landmark".to_string(),
        controls: vec![
            Control {
                id: "ITGC-CM-01".to_string(),
                name: "Change request documentation".to_string(),
                category: "Change Management".to_string(),
                requires_approval: false,
                requires_review: false,
                requires_ticket_link: true,
                requires_description: true,
                requires_risk_assessment: false,
                min_reviewers: 0,
            },
            Control {
                id: "ITGC-CM-02".to_string(),
                name: "Segregated change approval".to_string(),
                category: "Change Management".to_string(),
                requires_approval: true,
                requires_review: true,
                requires_ticket_link: false,
                requires_description: false,
                requires_risk_assessment: false,
                min_reviewers: 2,
            },
            Control {
                id: "ITGC-CM-03".to_string(),
                name: "Pre-deployment risk evaluation".to_string(),
                category: "Change Management".to_string(),
                requires_approval: true,
                requires_review: true,
                requires_ticket_link: true,
                requires_description: true,
                requires_risk_assessment: true,
                min_reviewers: 1,
            },
        ],
    }
}

/// Returns the HIPAA security rule framework.
#[must_use]
pub fn hipaa() -> ComplianceFramework {
    ComplianceFramework {
        code: FrameworkCode::new("hipaa"),
        name: "HIPAA Security Rule".to_string(),
        icon: "heart-pulse".to_string(),
        controls: vec![
            Control {
                id: "164.312(a)".to_string(),
                name: "Access control change authorization".to_string(),
                category: "Technical Safeguards".to_string(),
                requires_approval: true,
                requires_review: true,
                requires_ticket_link: false,
                requires_description: true,
                requires_risk_assessment: false,
                min_reviewers: 1,
            },
            Control {
                id: "164.312(b)".to_string(),
                name: "Audit controls for system changes".to_string(),
                category: "Technical Safeguards".to_string(),
                requires_approval: false,
                requires_review: true,
                requires_ticket_link: true,
                requires_description: true,
                requires_risk_assessment: true,
                min_reviewers: 0,
            },
        ],
    }
}

// ============================================================================
// SECTION: Catalog Lookup
// ============================================================================

/// Returns all builtin frameworks in catalog order.
#[must_use]
pub fn builtin_frameworks() -> Vec<ComplianceFramework> {
    vec![soc2(), iso27001(), sox(), hipaa()]
}

/// Finds a builtin framework by code.
#[must_use]
pub fn find_framework(code: &FrameworkCode) -> Option<ComplianceFramework> {
    builtin_frameworks().into_iter().find(|framework| framework.code == *code)
}
