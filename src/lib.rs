//! Workforce: task assignment and lifecycle tracking for staff members.
//!
//! This crate tracks work tasks assigned to staff: creation, reassignment
//! by customer reference, status and priority changes, comments and an
//! activity history, plus working-set queries such as the smart daily view.
//!
//! # Architecture
//!
//! Workforce follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory stores)
//!
//! # Modules
//!
//! - [`staff`]: Staff directory and assignee resolution
//! - [`task`]: Task lifecycle, activity log and queries
//! - [`config`]: Layered configuration
//! - [`workforce`]: Start-up wiring

pub mod config;
pub mod staff;
pub mod task;
pub mod workforce;
