//! Command handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

pub mod invite;
pub mod schedule;

pub use invite::InviteHandler;
pub use schedule::ScheduleHandler;
