// src/lib.rs

pub mod config;
pub mod presenter;
pub mod tasks;
