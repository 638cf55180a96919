//! Application services for task lifecycle orchestration and queries.

mod error;
mod lifecycle;
mod locks;
mod query;

pub use error::{ErrorKind, TaskLifecycleError, TaskLifecycleResult};
pub use lifecycle::{
    AddCommentRequest, CreateTaskRequest, ReassignTaskRequest, ReassignmentGuard,
    TaskLifecycleService,
};
pub use query::TaskQueryService;
