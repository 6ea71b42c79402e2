// crates/evidence-ledger-core/src/core/mod.rs
// ============================================================================
// Module: Evidence Ledger Core Types
// Description: Canonical evidence, scoring, compliance, and vault structures.
// Purpose: Provide stable, serializable types for the evidence pipeline.
// Dependencies: evidence-ledger-frameworks, serde
// ============================================================================

//! ## Overview
//! Core types define evidence records, score and gap derivations, compliance
//! results, vault snapshots, and check conclusions. These types are the
//! canonical source of truth for any derived API surfaces.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod compliance;
pub mod conclusion;
pub mod evidence;
pub mod gap;
pub mod hashing;
pub mod identifiers;
pub mod policy;
pub mod score;
pub mod time;
pub mod vault;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use compliance::COMPLIANT_THRESHOLD;
pub use compliance::ComplianceSnapshot;
pub use compliance::ControlResult;
pub use compliance::ControlStatus;
pub use compliance::FrameworkResult;
pub use compliance::OverallStatus;
pub use compliance::PARTIAL_THRESHOLD;
pub use compliance::RequirementCheck;
pub use compliance::evaluate_control;
pub use compliance::evaluate_framework;
pub use compliance::evaluate_frameworks;
pub use conclusion::CheckConclusion;
pub use conclusion::CheckReport;
pub use conclusion::FAILURE_SCORE;
pub use conclusion::SUCCESS_SCORE;
pub use conclusion::conclude_check;
pub use evidence::AuditReadiness;
pub use evidence::Comment;
pub use evidence::DocQuality;
pub use evidence::EvidenceRecord;
pub use evidence::IntentAlignment;
pub use evidence::Judgment;
pub use evidence::PrState;
pub use evidence::PullRequestFacts;
pub use evidence::QualitativeJudgments;
pub use evidence::RecordStatus;
pub use evidence::Review;
pub use evidence::ReviewState;
pub use gap::APPROVAL_SHORTFALL_HIGH;
pub use gap::CONTEXT_MIN_LEN;
pub use gap::Gap;
pub use gap::GapSeverity;
pub use gap::GapType;
pub use gap::detect_gaps;
pub use hashing::DEFAULT_HASH_ALGORITHM;
pub use hashing::HashAlgorithm;
pub use hashing::HashDigest;
pub use hashing::HashError;
pub use identifiers::OrgId;
pub use identifiers::RecordId;
pub use identifiers::VaultId;
pub use policy::EvidencePolicy;
pub use score::MAX_SCORE;
pub use score::ScoreBreakdown;
pub use score::ScoreInput;
pub use score::calculate_score;
pub use time::Timestamp;
pub use vault::EvidenceVault;
pub use vault::VaultSnapshot;
pub use vault::VaultSummary;
pub use vault::VerificationReport;
