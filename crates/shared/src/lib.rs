//! Shared utilities and common types for Ryder Cup Manager.
//!
//! This crate provides functionality used across the other crates:
//! - Common validation logic for request and entity fields

pub mod validation;
