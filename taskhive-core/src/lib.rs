//! # TaskHive Core Library
//!
//! Shared types and business logic for the TaskHive API server: the
//! authentication primitives, the data models, and the in-memory stores
//! that hold all state for the lifetime of the process.
//!
//! ## Module Organization
//!
//! - `models`: user and task record shapes
//! - `auth`: password hashing, session tokens, bearer authentication
//! - `store`: lock-guarded in-memory user and task collections

pub mod auth;
pub mod models;
pub mod store;

/// Current version of the TaskHive core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
