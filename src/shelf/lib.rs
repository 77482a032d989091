//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic personal book tracker**. The library holds every
//! rule about books, reviews, filtering and presentation state; the `shelf`
//! binary is just one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders templates, prompts             │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Command dispatch + refresh                               │
//! │  - Owns the edit session and the view state                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (repository, session, filter, view, stats)            │
//! │  - Pure logic over Rust types, no I/O assumptions           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - KeyValueStore trait, Persistence codec                   │
//! │  - FileStore (production), MemoryStore (testing)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never exits the
//! process and never assumes a terminal. Diagnostics go through `tracing`.
//!
//! ## Testing Strategy
//!
//! 1. **Core modules**: thorough unit tests against [`store::memory::MemoryStore`].
//! 2. **API** (`api.rs`): command sequences as a user would produce them.
//! 3. **CLI**: integration tests in `tests/` driving the binary.
//!
//! ## Module Overview
//!
//! - [`api`]: Command dispatch, the entry point for all operations
//! - [`repository`]: The canonical book collection and its mutations
//! - [`session`], [`rating`]: Add/edit form state and the star widget
//! - [`filter`]: Search and status filtering
//! - [`view`]: Projection into cards and empty states
//! - [`stats`]: Per-status counts
//! - [`store`]: Key-value persistence
//! - [`selector`]: Addressing books by position or id prefix
//! - [`config`], [`init`]: Display configuration and startup wiring
//! - [`icons`]: Named glyph lookup
//! - [`model`], [`error`]: Core types

pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod icons;
pub mod init;
pub mod model;
pub mod rating;
pub mod repository;
pub mod selector;
pub mod session;
pub mod stats;
pub mod store;
pub mod view;
