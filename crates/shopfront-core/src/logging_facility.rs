//! Structured logging facility for Shopfront
//!
//! This module provides a canonical logging facility with a single
//! initialization point via `init(profile)`. Layers below the application
//! boundary log internal detail with `tracing::debug!` only.
//!
//! # Usage
//!
//! ```rust
//! use shopfront_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;

pub use init::{init, Profile};
