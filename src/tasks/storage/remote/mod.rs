// src/tasks/storage/remote/mod.rs

//! Remote HTTP backend for the todos service.

pub mod store;
pub(crate) mod wire;

pub use store::RemoteTaskStore;
