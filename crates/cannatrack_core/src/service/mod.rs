//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate the per-kind entity stores into application-level
//!   operations (reference clearing, break lifecycle, stash upsert).
//! - Keep callers decoupled from slot/storage details.

pub mod tracker;
