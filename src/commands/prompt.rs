//! Conversational prompt helpers
//!
//! The schedule and delete flows collect input as a sequence of questions.
//! Each prompt suspends until the next message from the same user in the same
//! channel arrives. No timeout is applied; an unanswered prompt suspends that
//! flow indefinitely without blocking other commands or jobs.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use serenity::collector::CollectReply;
use serenity::model::id::{ChannelId, UserId};
use serenity::prelude::Context;

/// Wait for the next message from `author` in `channel`
///
/// Returns None only if the gateway shuts down while waiting.
pub async fn next_reply(
    serenity_ctx: &Context,
    channel: ChannelId,
    author: UserId,
) -> Option<String> {
    CollectReply::new(&serenity_ctx.shard)
        .channel_id(channel.0)
        .author_id(author.0)
        .await
        .map(|msg| msg.content.clone())
}

/// Send a prompt message, then wait for the reply
pub async fn ask(
    serenity_ctx: &Context,
    channel: ChannelId,
    author: UserId,
    question: &str,
) -> Result<Option<String>> {
    channel.say(&serenity_ctx.http, question).await?;
    Ok(next_reply(serenity_ctx, channel, author).await)
}
