//! Shared world state for task reassignment BDD scenarios.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::DefaultClock;
use rstest::fixture;
use workforce::{
    config::WorkforceConfig,
    task::{domain::Task, services::TaskLifecycleError},
    workforce::Workforce,
};

/// Scenario world for reassignment behaviour tests.
pub struct ReassignmentWorld {
    pub app: Option<Workforce<DefaultClock>>,
    pub last_reassignment: Option<Result<Task, TaskLifecycleError>>,
    pub last_view: Option<Vec<Task>>,
}

impl ReassignmentWorld {
    /// Creates a world with no application assembled yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            app: None,
            last_reassignment: None,
            last_view: None,
        }
    }

    /// Assembles the application from the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the default roster cannot be seeded.
    pub fn load_default_roster(&mut self) -> Result<(), eyre::Report> {
        let app = Workforce::from_config(&WorkforceConfig::default(), Arc::new(DefaultClock))?;
        self.app = Some(app);
        Ok(())
    }

    /// Returns the assembled application.
    ///
    /// # Errors
    ///
    /// Returns an error if no roster step ran.
    pub fn app(&self) -> Result<&Workforce<DefaultClock>, eyre::Report> {
        self.app
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing application in scenario world"))
    }
}

impl Default for ReassignmentWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ReassignmentWorld {
    ReassignmentWorld::default()
}

/// Parses an ISO calendar date from a scenario.
///
/// # Errors
///
/// Returns an error if the text is not a `YYYY-MM-DD` date.
pub fn parse_day(text: &str) -> Result<NaiveDate, eyre::Report> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|err| eyre::eyre!("invalid date '{text}' in scenario: {err}"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
