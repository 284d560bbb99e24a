//! # Namelist Architecture
//!
//! Namelist is a **UI-agnostic list library**: a searchable, paginated list of
//! short titles ("names") that can be marked done, persisted to a local
//! key-value store. The bundled terminal client is one presentation layer; a
//! browser or desktop front end would drive the same core.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  List State (names.rs)                                      │
//! │  - Owns items, pagination settings, query, confirm prompt   │
//! │  - Operations mutate, then persist                          │
//! │  - Derived views computed on demand (filter.rs)             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, pagination.rs)                      │
//! │  - StorageBackend trait: load(key) / save(key, value)       │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `names.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Storage problems are reported through `tracing` and recovered
//! locally; only user-actionable problems (duplicate title, bad index, bad
//! page size) come back as [`error::NamesError`].
//!
//! ## Module Overview
//!
//! - [`names`]: The list state manager, entry point for all operations
//! - [`filter`]: Filtered view and completion counts
//! - [`pagination`]: Persisted page settings and page-size options
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Item`, `PaginationSettings`)
//! - [`config`]: Presentation preferences
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod names;
pub mod pagination;
pub mod store;
