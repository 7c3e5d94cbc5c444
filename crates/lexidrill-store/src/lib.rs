//! lexidrill-store — word store implementations.
//!
//! `SqliteStore` is the durable store the CLI runs on; `MemoryStore` is a
//! drop-in substitution for tests and offline experiments.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
