//! Domain model for work task lifecycle management.
//!
//! Tasks carry their own activity log and comment thread. Every state
//! change that goes through the aggregate records provenance in the log,
//! which stays sorted by timestamp.

mod activity;
mod comment;
mod error;
mod filter;
mod ids;
mod priority;
mod status;
mod task;

pub use activity::{ActivityAction, ActivityActor, ActivityEntry, ActivityLog};
pub use comment::Comment;
pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use filter::{DateRange, TaskFilter};
pub use ids::{ActivityId, CommentId, CustomerReference, TaskId};
pub use priority::TaskPriority;
pub use status::TaskStatus;
pub use task::{Task, TaskDraft, TaskUpdate};
