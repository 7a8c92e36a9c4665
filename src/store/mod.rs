//! Storage collaborators for the Attendance Engine.
//!
//! The engine never owns persistence. It reads clock events and employee
//! profiles through the [`RecordStore`] and [`ProfileProvider`] traits, and
//! writes clock actions through a single atomic upsert. [`InMemoryStore`]
//! implements both traits for tests and local runs.

mod memory;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{ClockEvent, ClockUpdate, EmployeeProfile};

pub use memory::InMemoryStore;

/// Persistent storage of clock events.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Returns the employee's events with `start_inclusive <= schedule_date < end_exclusive`.
    ///
    /// Ordering of the returned events is unspecified.
    async fn find_events_in_range(
        &self,
        employee_id: &str,
        start_inclusive: NaiveDate,
        end_exclusive: NaiveDate,
    ) -> EngineResult<Vec<ClockEvent>>;

    /// Inserts or updates the event keyed by `(employee_id, date)` in one atomic write.
    ///
    /// An existing event has only the field named by `update` overwritten; a
    /// missing event is created with only that field set. Returns the event
    /// as stored after the write.
    async fn upsert_event(
        &self,
        employee_id: &str,
        date: NaiveDate,
        update: ClockUpdate,
    ) -> EngineResult<ClockEvent>;
}

/// Source of employee profiles.
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    /// Returns the profile for `employee_id`, or `None` if it does not exist.
    async fn get_profile(&self, employee_id: &str) -> EngineResult<Option<EmployeeProfile>>;

    /// Returns every profile, ordered by identifier.
    async fn list_profiles(&self) -> EngineResult<Vec<EmployeeProfile>>;
}
