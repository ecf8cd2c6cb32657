//! Task tracking for the time tracker.
//!
//! Users start and stop timed work sessions; stopped sessions carry their
//! elapsed hours and minutes and can be listed for a calendar-date window,
//! longest first. The module follows hexagonal architecture:
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
