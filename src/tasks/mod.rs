// src/tasks/mod.rs

//! Task core: the data model, the storage contract, the three backends and
//! the manager that fronts them.

pub mod error;
pub mod manager;
pub mod storage;
pub mod traits;
pub mod types;

// Re-export the items callers wire together
pub use error::{StorageError, TaskError};
pub use manager::TaskManager;
pub use storage::{StorageKind, connect};
pub use traits::TaskStorage;
pub use types::{Task, TaskPriority, TaskStatus};
