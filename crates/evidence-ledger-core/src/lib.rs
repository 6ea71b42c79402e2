// crates/evidence-ledger-core/src/lib.rs
// ============================================================================
// Module: Evidence Ledger Core Library
// Description: Public API surface for the Evidence Ledger core.
// Purpose: Expose core types, interfaces, and runtime engines.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Evidence Ledger core provides deterministic evidence scoring, gap
//! detection, compliance evaluation, and tamper-evident vault sealing for
//! pull-request decision evidence. It is backend-agnostic and integrates
//! through explicit interfaces rather than embedding into host platforms.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use interfaces::ExtractedRefs;
pub use interfaces::PolicyError;
pub use interfaces::PolicyStore;
pub use interfaces::RecalcUpdate;
pub use interfaces::RecordStore;
pub use interfaces::ReferenceExtractor;
pub use interfaces::StoreError;
pub use runtime::InMemoryRecordStore;
pub use runtime::LockError;
pub use runtime::LockRegistry;
pub use runtime::RecalcError;
pub use runtime::RecalcOutcome;
pub use runtime::Recalculator;
pub use runtime::SealError;
pub use runtime::VaultSealer;
