//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store mutation, cascade, recompute, and commit into
//!   use-case level APIs.
//! - Keep callers decoupled from storage and derivation details.

pub mod workload_service;
