//! # Orderpad Architecture
//!
//! Orderpad is a **UI-agnostic order-tracking library** with a CLI client.
//! The distinction matters: everything from [`api`] inward takes plain Rust
//! arguments, returns plain Rust types (`Result<CmdResult>`), and never
//! touches stdout/stderr or assumes a terminal.
//!
//! ## The Layers
//!
//! ```text
//! CLI (args.rs + main.rs)      argument parsing, printing, prompts, key input
//!          │
//! API (api.rs)                 thin facade, dispatch only
//!          │
//! Commands (commands/*.rs)     business logic: validate, mutate, persist
//!          │
//! Core (book, edit, render,    the order book, the inline-edit state
//!       validate, trig)        machine, the pure table view, validation,
//!          │                   and the standalone trig calculator
//! Storage (store/)             DataStore trait; FileStore / InMemoryStore
//! ```
//!
//! ## Data flow
//!
//! User input → validation ([`validate`]) → book mutation ([`book`]) →
//! persist ([`store`]) → re-render ([`render`]). Every mutation writes the
//! whole book back: two string entries, a JSON array of records and the
//! next-id counter. Decoding is tolerant — corrupt data degrades to an empty
//! book, never to a crash.
//!
//! ## Invariants
//!
//! - Ids are unique, assigned monotonically, and never reused after
//!   deletion, across reloads included.
//! - Quantity is always a positive integer; warehouse is always a member of
//!   the fixed set. Typed [`model::FieldChange`] values enforce this past
//!   the validation boundary.
//! - At most one inline edit is active at a time ([`edit::EditState`]).
//!
//! ## Module Overview
//!
//! - [`api`]: the facade — entry point for all operations
//! - [`commands`]: business logic per command
//! - [`book`]: the in-memory order book and its persistence round-trip
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: core data types (`Order`, `Warehouse`, `Column`)
//! - [`validate`]: field validators and the typed parse boundary
//! - [`render`]: pure table view-model
//! - [`edit`]: the inline-edit state machine
//! - [`trig`]: the standalone trigonometric calculator
//! - [`config`]: configuration management
//! - [`error`]: error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod edit;
pub mod error;
pub mod model;
pub mod render;
pub mod store;
pub mod trig;
pub mod validate;
