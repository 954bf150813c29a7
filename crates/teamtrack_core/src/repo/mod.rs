//! Persistence boundary abstractions and implementations.
//!
//! # Responsibility
//! - Define the snapshot load/save contract used by the workload service.
//! - Isolate SQLite and payload-format details from business orchestration.
//!
//! # Invariants
//! - The full state is persisted as one structured record under one
//!   well-known key; there is no per-entity storage.
//! - Load distinguishes an absent record from a corrupt one.

pub mod state_repo;
