//! # Notes Database Crate
//!
//! This crate acts as a high-level, application-specific interface to the
//! PostgreSQL database that stores notes.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** all SQL lives here. The HTTP layer only sees the
//!   `NoteRepository` trait.
//! - **Asynchronous & Pooled:** operations are async and draw connections from
//!   a `PgPool` built once at startup. Writes and reads run inside a short
//!   transaction that is committed, or rolled back when dropped.
//!
//! ## Public API
//!
//! - `connect` / `connect_lazy`: build the connection pool from `DatabaseSettings`.
//! - `run_migrations`: applies the embedded migrations (creates `notes` if absent).
//! - `NoteRepository`: the data-access contract.
//! - `DbRepository`: the PostgreSQL implementation.
//! - `MemoryRepository`: an in-process implementation for tests and demos.
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod memory;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, connect_lazy, run_migrations};
pub use error::DbError;
pub use memory::MemoryRepository;
pub use repository::{DbRepository, NoteRepository};
