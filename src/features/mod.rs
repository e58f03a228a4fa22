//! # Features Layer
//!
//! Feature modules for the herald bot.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

pub mod invite;
pub mod scheduling;

// Re-export feature items
pub use invite::invite_url;
pub use scheduling::{
    ChannelSink, DiscordChannelSink, JobHandle, ScheduleRegistry, ScheduledMessage,
};
