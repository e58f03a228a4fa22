//! Prefix command dispatch
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use log::debug;
use serenity::model::channel::Message;
use serenity::prelude::Context;
use std::sync::Arc;

use super::context::CommandContext;
use super::handlers::{InviteHandler, ScheduleHandler};
use super::registry::CommandRegistry;
use crate::features::scheduling::ScheduleRegistry;

/// Routes incoming messages to prefix command handlers
pub struct CommandHandler {
    prefix: String,
    registry: CommandRegistry,
    context: Arc<CommandContext>,
}

impl CommandHandler {
    /// Create the dispatcher with all handlers registered
    pub fn new(prefix: String, schedules: Arc<ScheduleRegistry>) -> Self {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(ScheduleHandler));
        registry.register(Arc::new(InviteHandler));

        Self {
            prefix,
            registry,
            context: Arc::new(CommandContext::new(schedules)),
        }
    }

    /// Handle an incoming message, dispatching if it invokes a known command
    ///
    /// Non-command messages and unknown command words are ignored.
    pub async fn handle_message(&self, serenity_ctx: &Context, msg: &Message) -> Result<()> {
        let Some(command) = parse_command(&msg.content, &self.prefix) else {
            return Ok(());
        };

        let Some(handler) = self.registry.get(command) else {
            debug!("Ignoring unknown command '{command}' from {}", msg.author.name);
            return Ok(());
        };

        debug!("Dispatching command '{command}' for {}", msg.author.name);
        handler
            .handle(Arc::clone(&self.context), serenity_ctx, command, msg)
            .await
    }
}

/// Extract the command word from a message, if it starts with the prefix
///
/// `!schedule please` with prefix `!` yields `schedule`. A bare prefix or a
/// prefix followed only by whitespace is not a command.
pub fn parse_command<'a>(content: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = content.strip_prefix(prefix)?;
    rest.split_whitespace().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_basic() {
        assert_eq!(parse_command("!schedule", "!"), Some("schedule"));
        assert_eq!(parse_command("!list", "!"), Some("list"));
    }

    #[test]
    fn test_parse_command_with_trailing_text() {
        assert_eq!(parse_command("!schedule something", "!"), Some("schedule"));
    }

    #[test]
    fn test_parse_command_without_prefix() {
        assert_eq!(parse_command("schedule", "!"), None);
        assert_eq!(parse_command("hello there", "!"), None);
    }

    #[test]
    fn test_parse_command_bare_prefix() {
        assert_eq!(parse_command("!", "!"), None);
        assert_eq!(parse_command("!   ", "!"), None);
    }

    #[test]
    fn test_parse_command_custom_prefix() {
        assert_eq!(parse_command("$$invite", "$$"), Some("invite"));
        assert_eq!(parse_command("!invite", "$$"), None);
    }

    #[test]
    fn test_dispatcher_registers_all_commands() {
        let handler = CommandHandler::new(
            "!".to_string(),
            Arc::new(ScheduleRegistry::new()),
        );

        for name in ["schedule", "list", "delete", "invite"] {
            assert!(handler.registry.contains(name), "missing command {name}");
        }
    }
}
