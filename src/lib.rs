// Core layer - configuration and shared utilities
pub mod core;

// Features layer - all feature modules
pub mod features;

// Application layer
pub mod commands;

// Re-export core config for convenience
pub use core::Config;

// Re-export feature items for convenience
pub use features::{
    // Invite
    invite_url,
    // Scheduling
    JobHandle, ScheduleRegistry, ScheduledMessage,
};
