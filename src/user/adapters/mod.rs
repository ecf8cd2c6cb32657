//! Adapters for the user provisioning ports.
//!
//! - [`memory`]: thread-safe in-memory user store and identity registry
//! - [`postgres`]: `PostgreSQL` persistence using Diesel
//! - [`http`]: identity registry client over HTTP

pub mod http;
pub mod memory;
pub mod postgres;
