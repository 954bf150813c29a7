//! Pure derivation layer over entity snapshots.
//!
//! # Responsibility
//! - Recompute project completion and member workload from borrowed state.
//!
//! # Invariants
//! - Derivation functions never mutate their inputs and hold no cache;
//!   staleness is impossible by construction.

pub mod capacity;
pub mod progress;
