//! Shared context for command handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use std::sync::Arc;

use crate::features::scheduling::ScheduleRegistry;

/// Shared context for all command handlers
///
/// Carries the services command handlers need; currently that is just the
/// schedule registry.
#[derive(Clone)]
pub struct CommandContext {
    pub schedules: Arc<ScheduleRegistry>,
}

impl CommandContext {
    /// Create a new CommandContext over the given registry
    pub fn new(schedules: Arc<ScheduleRegistry>) -> Self {
        Self { schedules }
    }
}
