//! Domain model for staff members.

mod error;
mod ids;
mod member;

pub use error::StaffDomainError;
pub use ids::StaffId;
pub use member::{StaffAssignee, StaffMember};
