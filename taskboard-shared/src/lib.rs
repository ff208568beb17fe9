//! # Taskboard Shared Library
//!
//! Domain models and database plumbing shared by the Taskboard binaries.
//!
//! ## Modules
//!
//! - `models`: User and Task models with their database operations
//! - `db`: Connection pool management and migrations

pub mod db;
pub mod models;
