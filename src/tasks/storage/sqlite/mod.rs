// src/tasks/storage/sqlite/mod.rs

//! Embedded SQLite backend: schema migration, enum name mapping and the
//! store itself.

pub(crate) mod mapping;
pub mod migration;
pub mod store;

pub use store::SqliteTaskStore;
