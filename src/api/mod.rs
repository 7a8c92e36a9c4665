//! HTTP API module for the Attendance Engine.
//!
//! This module exposes the employee overview, the monthly attendance report
//! and the clock-in/clock-out actions over HTTP.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::AttendanceQuery;
pub use response::{ApiError, AttendanceResponse, ClockResponse, DayView};
pub use state::{AppState, Clock, FixedClock, SystemClock};
