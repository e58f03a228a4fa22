//! # Scheduling Feature
//!
//! In-memory registry of pending scheduled messages, each backed by one
//! cancellable delayed send task.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod clock;
pub mod job;
pub mod registry;

pub use job::{schedule_send, ChannelSink, DiscordChannelSink, JobHandle};
pub use registry::{ScheduleRegistry, ScheduledMessage};
