//! # Storage Layer
//!
//! The storage abstraction for orderpad. The [`DataStore`] trait exposes a
//! small string key-value surface: the order book persists as exactly two
//! entries, a JSON-array blob of order records and the decimal form of the
//! next-id counter.
//!
//! ## Design Rationale
//!
//! The trait is deliberately stringly at this level:
//! - The persisted layout (two string entries) is the external interface and
//!   must survive backend swaps unchanged.
//! - Corruption tolerance (malformed blob, non-numeric counter) is a decoding
//!   concern and lives in one place, [`crate::book::OrderBook::load`], shared
//!   by every backend.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one file per entry under the
//!   scope directory.
//! - [`memory::InMemoryStore`]: in-memory storage for tests, no persistence.
//!
//! ## Scope Pattern
//!
//! All operations take a [`Scope`] parameter:
//! - `Scope::Project`: local `.orderpad/` directory in the current project
//! - `Scope::Global`: user-wide storage
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! .orderpad/
//! ├── orders.json   # JSON array of order records
//! ├── next_id       # decimal string, the next id to issue
//! └── config.json   # scope configuration
//! ```

use crate::error::Result;
use crate::model::Scope;

pub mod fs;
pub mod memory;

/// Entry key for the serialized order collection.
pub const ORDERS_KEY: &str = "orders.json";
/// Entry key for the next-id counter.
pub const NEXT_ID_KEY: &str = "next_id";

/// Abstract interface for the key-value entries backing an order book.
///
/// Reading an absent entry is `Ok(None)`, never an error; writes create or
/// overwrite. Implementations do not interpret entry contents.
pub trait DataStore {
    /// Read an entry, or `None` if it was never written.
    fn read_entry(&self, key: &str, scope: Scope) -> Result<Option<String>>;

    /// Create or overwrite an entry.
    fn write_entry(&mut self, key: &str, value: &str, scope: Scope) -> Result<()>;
}
