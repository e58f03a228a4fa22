//! Prefix command handler trait
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use serenity::model::channel::Message;
use serenity::prelude::Context;
use std::sync::Arc;

use super::context::CommandContext;

/// Trait for prefix command handlers
///
/// Each handler processes one or more commands. Handlers are registered with
/// a CommandRegistry and dispatched based on the word after the prefix.
///
/// # Example
///
/// ```ignore
/// pub struct PingHandler;
///
/// #[async_trait]
/// impl PrefixCommandHandler for PingHandler {
///     fn command_names(&self) -> &'static [&'static str] {
///         &["ping"]
///     }
///
///     async fn handle(
///         &self,
///         ctx: Arc<CommandContext>,
///         serenity_ctx: &Context,
///         command: &str,
///         msg: &Message,
///     ) -> Result<()> {
///         msg.channel_id.say(&serenity_ctx.http, "Pong!").await?;
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait PrefixCommandHandler: Send + Sync {
    /// Command name(s) this handler processes
    fn command_names(&self) -> &'static [&'static str];

    /// Handle the command
    ///
    /// # Arguments
    ///
    /// * `ctx` - Shared command context with the schedule registry
    /// * `serenity_ctx` - Serenity context for Discord API calls
    /// * `command` - The command word the dispatcher matched, without prefix
    /// * `msg` - The message that invoked the command
    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &str,
        msg: &Message,
    ) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait must stay object-safe for registry dispatch
    fn _assert_object_safe(_: &dyn PrefixCommandHandler) {}
}
