//! Explicit start-up wiring of stores, staff roster and services.

use crate::{
    config::{StaffSeed, WorkforceConfig, load_config},
    staff::{
        adapters::memory::InMemoryStaffDirectory,
        domain::{StaffDomainError, StaffId, StaffMember},
        ports::StaffDirectoryError,
    },
    task::{
        adapters::memory::InMemoryTaskRepository,
        services::{TaskLifecycleService, TaskQueryService},
    },
};
use mockable::{Clock, DefaultClock};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Lifecycle service wired to the in-memory adapters.
pub type InMemoryLifecycleService<C> =
    TaskLifecycleService<InMemoryTaskRepository, InMemoryStaffDirectory, C>;

/// Errors raised while assembling the application.
#[derive(Debug, Error)]
pub enum WorkforceError {
    /// Configuration could not be loaded.
    #[error("failed to load configuration: {0}")]
    Config(#[from] Box<figment::Error>),
    /// A seeded staff record is invalid.
    #[error("invalid staff seed '{name}': {source}")]
    InvalidStaffSeed {
        /// Name of the offending seed.
        name: String,
        /// Validation failure.
        source: StaffDomainError,
    },
    /// A seeded staff record clashes with an earlier one.
    #[error(transparent)]
    Directory(#[from] StaffDirectoryError),
}

/// In-process task tracker: staff directory, task store and services.
pub struct Workforce<C>
where
    C: Clock + Send + Sync,
{
    staff: Arc<InMemoryStaffDirectory>,
    tasks: Arc<InMemoryTaskRepository>,
    lifecycle: InMemoryLifecycleService<C>,
    queries: TaskQueryService<InMemoryTaskRepository>,
}

impl Workforce<DefaultClock> {
    /// Loads configuration from the standard sources and assembles the
    /// application with the system clock.
    ///
    /// # Errors
    ///
    /// Returns [`WorkforceError`] when configuration loading or staff
    /// seeding fails.
    pub fn load() -> Result<Self, WorkforceError> {
        let config = load_config()?;
        Self::from_config(&config, Arc::new(DefaultClock))
    }
}

impl<C> Workforce<C>
where
    C: Clock + Send + Sync,
{
    /// Assembles the application from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WorkforceError`] when a staff seed is invalid or duplicated.
    pub fn from_config(config: &WorkforceConfig, clock: Arc<C>) -> Result<Self, WorkforceError> {
        let staff = Arc::new(InMemoryStaffDirectory::new());
        for seed in &config.staff {
            staff.register(member_from_seed(seed)?)?;
        }

        let tasks = Arc::new(InMemoryTaskRepository::new());
        let lifecycle = TaskLifecycleService::new(Arc::clone(&tasks), Arc::clone(&staff), clock)
            .with_reassignment_guard(config.reassignment.guard);
        let queries = TaskQueryService::new(Arc::clone(&tasks));

        info!(
            staff = config.staff.len(),
            reassignment_guard = ?config.reassignment.guard,
            "workforce initialised"
        );
        Ok(Self {
            staff,
            tasks,
            lifecycle,
            queries,
        })
    }

    /// Returns the staff directory.
    #[must_use]
    pub fn staff(&self) -> &InMemoryStaffDirectory {
        &self.staff
    }

    /// Returns the task store.
    #[must_use]
    pub fn tasks(&self) -> &InMemoryTaskRepository {
        &self.tasks
    }

    /// Returns the lifecycle service.
    #[must_use]
    pub const fn lifecycle(&self) -> &InMemoryLifecycleService<C> {
        &self.lifecycle
    }

    /// Returns the query service.
    #[must_use]
    pub const fn queries(&self) -> &TaskQueryService<InMemoryTaskRepository> {
        &self.queries
    }
}

fn member_from_seed(seed: &StaffSeed) -> Result<StaffMember, WorkforceError> {
    let invalid = |source| WorkforceError::InvalidStaffSeed {
        name: seed.name.clone(),
        source,
    };
    let id = match &seed.id {
        Some(id) => StaffId::new(id.as_str()).map_err(invalid)?,
        None => StaffId::generate(),
    };
    StaffMember::new(id, &seed.name, &seed.email, &seed.department).map_err(invalid)
}
