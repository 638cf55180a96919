//! In-memory task store adapter.

mod repository;

pub use repository::InMemoryTaskRepository;
