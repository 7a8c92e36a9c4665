//! Application state for the Attendance Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers, including the clock used to decide "now".

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::service::AttendanceService;

/// A source of the current instant.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant, for tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    service: Arc<AttendanceService>,
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates application state driven by the wall clock.
    pub fn new(service: AttendanceService) -> Self {
        Self::with_clock(service, Arc::new(SystemClock))
    }

    /// Creates application state with an explicit clock.
    pub fn with_clock(service: AttendanceService, clock: Arc<dyn Clock>) -> Self {
        Self {
            service: Arc::new(service),
            clock,
        }
    }

    /// Returns the attendance service.
    pub fn service(&self) -> &AttendanceService {
        &self.service
    }

    /// Returns the current instant according to the configured clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_fixed_clock_is_frozen() {
        let at = Utc.with_ymd_and_hms(2026, 10, 16, 3, 0, 0).unwrap();
        let clock = FixedClock(at);
        assert_eq!(clock.now(), at);
        assert_eq!(clock.now(), at);
    }
}
