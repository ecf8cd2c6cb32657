//! User provisioning for the time tracker.
//!
//! Users are created from a passport number whose legal identity is looked
//! up in an external registry, then read, updated, deleted, and listed with
//! equality filters and pagination. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
