//! # Memopad Architecture
//!
//! Memopad is a **UI-agnostic note-collection library**. The CLI binary is one
//! client of it; the core never assumes a terminal is present.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, cli/, editor.rs, wired by main.rs)     │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (list positions → note ids)            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per user intent, returns CmdResult            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Notebook (notebook.rs)                                     │
//! │  - The note collection + selection state machine            │
//! │  - Enforces: never empty, unique ids, valid selection       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - KeyValueStore trait: one JSON snapshot under a fixed key │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence Contract
//!
//! The entire collection is one serialized blob under a fixed key. Every
//! mutating operation rewrites the full snapshot synchronously; last writer
//! wins. A second process pointed at the same data directory is unsupported.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`notebook`]: Collection + selection state machine
//! - [`presenter`]: Derives the ordered, labeled list view model
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Note`, ordering, title defaults)
//! - [`config`]: Configuration management
//! - [`editor`]: External editor integration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod notebook;
pub mod presenter;
pub mod store;
