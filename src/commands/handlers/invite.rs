//! Invite command handler
//!
//! Handles: invite
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use serenity::model::channel::Message;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::PrefixCommandHandler;
use crate::features::invite::invite_url;

/// Handler for the invite command
pub struct InviteHandler;

#[async_trait]
impl PrefixCommandHandler for InviteHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["invite"]
    }

    async fn handle(
        &self,
        _ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        _command: &str,
        msg: &Message,
    ) -> Result<()> {
        let bot_id = serenity_ctx.cache.current_user_id();
        let url = invite_url(bot_id);

        msg.channel_id
            .say(
                &serenity_ctx.http,
                format!("Invite me using this link: {url}"),
            )
            .await?;

        info!("Sent invite link to {}", msg.author.name);
        Ok(())
    }
}
