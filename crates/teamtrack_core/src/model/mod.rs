//! Canonical domain records for the workload tracker.
//!
//! # Responsibility
//! - Define the record shapes for the three entity collections.
//! - Keep wire naming aligned with the external snapshot schema.
//!
//! # Invariants
//! - Every record is identified by a stable uuid that is never reused.
//! - Cross-entity references are by id only; no record embeds another.

pub mod member;
pub mod project;
pub mod task;
