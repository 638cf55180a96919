//! Staff directory for assignable workforce members.
//!
//! The task core only needs to resolve a staff identifier into a name
//! snapshot at assignment time. The directory itself is a plain keyed store
//! with no business rules beyond record validation:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
