//! # Roster Architecture
//!
//! Roster is a **UI-agnostic record-keeping library** with a thin CLI client.
//! It maintains a collection of `{id, email, age}` records persisted as a
//! JSON array in a single file.
//!
//! ## Layers
//!
//! ```text
//! CLI layer   (main.rs, args.rs)  — argument parsing, printing, exit codes.
//!                                   The ONLY place that knows about
//!                                   stdout/stderr.
//! API layer   (api.rs)            — thin facade, one method per operation,
//!                                   returns structured Result types.
//! Commands    (commands/*.rs)     — pure business logic over the store
//!                                   trait; no I/O assumptions.
//! Storage     (store/)            — RecordStore trait; FileStore for
//!                                   production, InMemoryStore for tests.
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>`, and never writes to stdout/stderr or calls
//! `std::process::exit`.
//!
//! ## Outcome Model
//!
//! Data-level conditions — a duplicate id on add, a missing id on find or
//! remove — are not errors. They are reported as [`commands::CmdOutcome`]
//! variants on [`commands::CmdResult`] and the process still exits cleanly.
//! Only validation and I/O failures surface as [`error::RosterError`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `Record` type and its JSON encoding rules
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod store;
