//! Port contracts for staff resolution.

pub mod directory;

pub use directory::{StaffDirectory, StaffDirectoryError, StaffDirectoryResult};
