// crates/evidence-ledger-core/src/runtime/mod.rs
// ============================================================================
// Module: Evidence Ledger Runtime
// Description: Recalculation, sealing, locking, and in-memory storage engines.
// Purpose: Execute the evidence pipeline over the interface seams.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! The runtime hosts the two stateful engines of the pipeline, the
//! recalculation orchestrator and the vault sealer, plus the per-record lock
//! registry they share and an in-memory store for tests and demos. All API
//! surfaces must call into these engines to preserve the score/gap
//! consistency and idempotent-sealing invariants.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod locks;
pub mod recalc;
pub mod sealer;
pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use locks::LockError;
pub use locks::LockRegistry;
pub use recalc::CONFIRMED_SCORE;
pub use recalc::NEEDS_REVIEW_SCORE;
pub use recalc::RecalcError;
pub use recalc::RecalcOutcome;
pub use recalc::Recalculator;
pub use sealer::SealError;
pub use sealer::VaultSealer;
pub use store::InMemoryRecordStore;
