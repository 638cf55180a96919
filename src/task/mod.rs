//! Work task lifecycle management.
//!
//! Tasks are assigned to staff members, change status and priority, collect
//! comments and keep an activity history. Customer work can be handed over
//! to another staff member by reassigning its customer reference, which
//! cancels the current task and creates its replacement. The module follows
//! hexagonal architecture:
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
