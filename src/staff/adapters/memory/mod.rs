//! In-memory staff directory adapter.

mod directory;

pub use directory::InMemoryStaffDirectory;
