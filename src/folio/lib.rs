//! # Folio Architecture
//!
//! Folio is a **UI-agnostic portfolio showcase library**. This is not a
//! CLI application that happens to have some library code—it's a
//! library that happens to have a CLI client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, prompts for consent    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over the two editors                         │
//! │  - Owns the session state (showcase, slot, previews)        │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Editor Layer (commands/*.rs, image/)                       │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Two Editors
//!
//! - **Collection editor** (`commands/`): an ordered list of project
//!   records with add/update/remove by id, plus scratch-buffer edits
//!   for a draft's technology and feature lists.
//! - **Image slot editor** (`image/`): a single optional image
//!   reference with preview-before-commit semantics. Staged uploads get
//!   transient preview handles with explicit acquire/release.
//!
//! Both are session-scoped: state lives only in memory and every
//! session starts from a fixed seed. There is no store layer because
//! there is nothing to persist.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** prompts: destructive operations take a `Confirmation`
//!   token the display layer obtained from the user
//!
//! This means the same core could serve a web UI, a TUI, or any other
//! client.
//!
//! ## Testing Strategy
//!
//! 1. **Editors** (`commands/*.rs`, `image/`): thorough unit tests of
//!    business logic. This is where the lion's share of testing lives.
//! 2. **API** (`api.rs`): tests verifying dispatch, session seeding,
//!    and resource accounting across editor boundaries.
//! 3. **CLI**: integration tests driving the binary end to end.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Collection-editor logic, one module per operation
//! - [`image`]: Image slot state machine and preview registry
//! - [`model`]: Core data types (`Project`, `ProjectDraft`)
//! - [`showcase`]: The owned, session-scoped collection state
//! - [`config`]: Display-layer configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod image;
pub mod model;
pub mod showcase;
