//! Time tracker: user provisioning and work-session tracking.
//!
//! Users are created from a passport number whose identity fields are
//! resolved through an external registry. Tasks are timed work sessions
//! owned by a user; stopping one records the elapsed hours and minutes.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and lookups
//! - **Adapters**: In-memory, `PostgreSQL`, and HTTP implementations of ports
//! - **Services**: Orchestration with structured logging
//!
//! # Modules
//!
//! - [`user`]: Passport-based user provisioning and listing
//! - [`task`]: Work-session start, stop, and period reports
//! - [`api`]: REST surface and error envelope
//! - [`app`]: Wiring of adapters from [`config`]

pub mod api;
pub mod app;
pub mod clock;
pub mod config;
pub mod db;
pub mod error;
pub mod task;
pub mod user;
