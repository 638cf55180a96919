//! Shared test helpers for in-memory integration tests.

use chrono::{DateTime, Local, NaiveDate, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use std::sync::{
    Arc,
    atomic::{AtomicI64, Ordering},
};
use workforce::{
    config::WorkforceConfig,
    task::{domain::TaskPriority, services::CreateTaskRequest},
    workforce::Workforce,
};

/// Clock advancing one millisecond per reading, so creation order is
/// observable in timestamps.
pub struct TickingClock {
    origin: DateTime<Utc>,
    ticks: AtomicI64,
}

impl TickingClock {
    /// Creates a clock starting at 2025-08-03 08:00 UTC.
    ///
    /// # Panics
    ///
    /// Never in practice; the origin is a fixed valid instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Utc
                .with_ymd_and_hms(2025, 8, 3, 8, 0, 0)
                .single()
                .expect("valid origin instant"),
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for TickingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.origin + TimeDelta::milliseconds(tick)
    }
}

/// Provides an application seeded with the default roster.
#[fixture]
pub fn app() -> Workforce<TickingClock> {
    Workforce::from_config(&WorkforceConfig::default(), Arc::new(TickingClock::new()))
        .expect("default roster is valid")
}

/// Returns a day in August 2025.
#[must_use]
pub fn august(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, day).expect("valid August date")
}

/// Builds a creation request starting on `start` and due two days later.
#[must_use]
pub fn request(
    title: &str,
    staff_id: &str,
    priority: TaskPriority,
    start: NaiveDate,
) -> CreateTaskRequest {
    CreateTaskRequest::new(
        title,
        priority,
        staff_id,
        start,
        start + TimeDelta::days(2),
        "manager-1",
    )
}
