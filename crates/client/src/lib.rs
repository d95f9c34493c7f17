//! Ryder Cup Manager backend client.
//!
//! This crate contains:
//! - Configuration and logging setup
//! - Repository traits with REST and in-memory implementations
//! - Invitation and round use cases
//! - Client error types

pub mod config;
pub mod error;
pub mod logging;
pub mod repositories;
pub mod services;

pub use error::ClientError;
