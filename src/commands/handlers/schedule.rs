//! Scheduling command handlers
//!
//! Handles: schedule, list, delete
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use regex::Regex;
use serenity::model::channel::Message;
use serenity::model::id::ChannelId;
use serenity::model::mention::Mentionable;
use serenity::prelude::Context;
use std::sync::{Arc, OnceLock};
use uuid::Uuid;

use crate::commands::context::CommandContext;
use crate::commands::handler::PrefixCommandHandler;
use crate::commands::prompt::ask;
use crate::core::response::chunk_for_message;
use crate::features::scheduling::clock::{
    is_future, parse_local_datetime, parse_offset_hours, to_utc, DATE_TIME_FORMAT,
};
use crate::features::scheduling::{schedule_send, DiscordChannelSink, ScheduledMessage};

/// Handler for scheduled-message commands
pub struct ScheduleHandler;

#[async_trait]
impl PrefixCommandHandler for ScheduleHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["schedule", "list", "delete"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &str,
        msg: &Message,
    ) -> Result<()> {
        match command {
            "schedule" => self.handle_schedule(&ctx, serenity_ctx, msg).await,
            "list" => self.handle_list(&ctx, serenity_ctx, msg).await,
            "delete" => self.handle_delete(&ctx, serenity_ctx, msg).await,
            _ => Ok(()),
        }
    }
}

impl ScheduleHandler {
    /// Handle !schedule - the three-step conversational flow
    ///
    /// Collects content, a future date/time with GMT offset, and a target
    /// channel mention, then spawns the delayed send job and registers it.
    /// Each prompt only accepts the next message from the command author in
    /// the invoking channel.
    async fn handle_schedule(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        msg: &Message,
    ) -> Result<()> {
        let flow_id = Uuid::new_v4();
        let author = msg.author.id;
        let channel = msg.channel_id;
        debug!("[{flow_id}] Starting schedule flow for {}", msg.author.name);

        // 1. The message to schedule
        let Some(content) = ask(
            serenity_ctx,
            channel,
            author,
            "What would you like your message to be?",
        )
        .await?
        else {
            return Ok(());
        };

        // 2. Date/time and timezone offset, re-prompted until a valid future
        //    time comes together
        let scheduled_at = loop {
            let local = loop {
                let Some(reply) = ask(
                    serenity_ctx,
                    channel,
                    author,
                    "Enter the date and time for the message (Format: `YYYY-MM-DD HH:MM`):",
                )
                .await?
                else {
                    return Ok(());
                };
                match parse_local_datetime(&reply) {
                    Some(dt) => break dt,
                    None => {
                        channel
                            .say(
                                &serenity_ctx.http,
                                "Invalid date format. Please use `YYYY-MM-DD HH:MM`.",
                            )
                            .await?;
                    }
                }
            };

            let offset = loop {
                let Some(reply) = ask(
                    serenity_ctx,
                    channel,
                    author,
                    "Enter the timezone offset from GMT in hours (e.g., +0 for GMT, -5 for EST, +3.5):",
                )
                .await?
                else {
                    return Ok(());
                };
                match parse_offset_hours(&reply) {
                    Some(off) => break off,
                    None => {
                        channel
                            .say(
                                &serenity_ctx.http,
                                "Invalid timezone offset. Please enter a number (e.g., +0, -5, 3.5).",
                            )
                            .await?;
                    }
                }
            };

            let candidate = to_utc(local, offset);
            if is_future(candidate, Utc::now()) {
                break candidate;
            }
            channel
                .say(
                    &serenity_ctx.http,
                    "The scheduled time is in the past! Please choose a future time.",
                )
                .await?;
        };

        // 3. Destination channel; no mention aborts the whole flow
        let Some(reply) = ask(
            serenity_ctx,
            channel,
            author,
            "Mention the channel where the message should be sent:",
        )
        .await?
        else {
            return Ok(());
        };
        let Some(target) = parse_channel_mention(&reply) else {
            channel
                .say(
                    &serenity_ctx.http,
                    "No valid channel mentioned. Canceling scheduling.",
                )
                .await?;
            debug!("[{flow_id}] Schedule flow aborted: no channel mentioned");
            return Ok(());
        };

        let sink = Arc::new(DiscordChannelSink::new(
            Arc::clone(&serenity_ctx.http),
            target,
        ));
        let id = schedule_send(
            &ctx.schedules,
            msg.author.name.clone(),
            content,
            scheduled_at,
            target,
            sink,
        )?;

        info!(
            "[{flow_id}] Scheduled message {id} by {} for {} GMT in channel {target}",
            msg.author.name,
            scheduled_at.format(DATE_TIME_FORMAT)
        );
        channel
            .say(
                &serenity_ctx.http,
                format!(
                    "Message scheduled with ID {id} for {} GMT in {}.",
                    scheduled_at.format(DATE_TIME_FORMAT),
                    target.mention()
                ),
            )
            .await?;
        Ok(())
    }

    /// Handle !list - show all pending scheduled messages
    async fn handle_list(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        msg: &Message,
    ) -> Result<()> {
        let entries = ctx.schedules.list();
        if entries.is_empty() {
            msg.channel_id
                .say(&serenity_ctx.http, "No scheduled messages.")
                .await?;
            return Ok(());
        }

        let listing = format_listing("Scheduled messages:", &entries);
        for chunk in chunk_for_message(&listing) {
            msg.channel_id.say(&serenity_ctx.http, chunk).await?;
        }
        Ok(())
    }

    /// Handle !delete - show the listing, then cancel one entry by id
    async fn handle_delete(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        msg: &Message,
    ) -> Result<()> {
        let entries = ctx.schedules.list();
        if entries.is_empty() {
            msg.channel_id
                .say(&serenity_ctx.http, "No scheduled messages to delete.")
                .await?;
            return Ok(());
        }

        let listing = format_listing("Scheduled messages:", &entries);
        for chunk in chunk_for_message(&listing) {
            msg.channel_id.say(&serenity_ctx.http, chunk).await?;
        }

        let Some(reply) = ask(
            serenity_ctx,
            msg.channel_id,
            msg.author.id,
            "Enter the ID of the scheduled message you want to delete:",
        )
        .await?
        else {
            return Ok(());
        };

        let Some(del_id) = parse_delete_id(&reply) else {
            msg.channel_id
                .say(&serenity_ctx.http, "Invalid ID. Cancellation of deletion.")
                .await?;
            return Ok(());
        };

        // Negative ids parse fine but can match no entry
        let deleted = u64::try_from(del_id)
            .map(|id| ctx.schedules.cancel(id))
            .unwrap_or(false);
        if deleted {
            info!("Cancelled scheduled message {del_id} for {}", msg.author.name);
            msg.channel_id
                .say(
                    &serenity_ctx.http,
                    format!("Deleted scheduled message with ID {del_id}."),
                )
                .await?;
        } else {
            msg.channel_id
                .say(
                    &serenity_ctx.http,
                    "No scheduled message with that ID was found.",
                )
                .await?;
        }
        Ok(())
    }
}

/// Render the listing header plus one summary line per entry
fn format_listing(header: &str, entries: &[ScheduledMessage]) -> String {
    let lines: Vec<String> = entries.iter().map(|e| e.summary_line()).collect();
    format!("{header}\n{}", lines.join("\n"))
}

fn channel_mention_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<#(\d+)>").expect("static pattern is valid"))
}

/// Extract the first channel mention (`<#id>`) from message text
pub fn parse_channel_mention(content: &str) -> Option<ChannelId> {
    channel_mention_regex()
        .captures(content)?
        .get(1)?
        .as_str()
        .parse()
        .ok()
        .map(ChannelId)
}

/// Parse the id answer in the delete flow
///
/// Any integer is accepted; an id that matches no entry (negatives included)
/// lands on the not-found path rather than aborting the flow.
pub fn parse_delete_id(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_handler_commands() {
        let handler = ScheduleHandler;
        let names = handler.command_names();

        assert!(names.contains(&"schedule"));
        assert!(names.contains(&"list"));
        assert!(names.contains(&"delete"));
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn test_parse_channel_mention() {
        assert_eq!(parse_channel_mention("<#123>"), Some(ChannelId(123)));
        assert_eq!(
            parse_channel_mention("post it in <#456789> please"),
            Some(ChannelId(456789))
        );
        // First mention wins
        assert_eq!(
            parse_channel_mention("<#1> or <#2>"),
            Some(ChannelId(1))
        );
    }

    #[test]
    fn test_parse_channel_mention_rejects_non_mentions() {
        assert_eq!(parse_channel_mention("general"), None);
        assert_eq!(parse_channel_mention("#general"), None);
        assert_eq!(parse_channel_mention("<@123>"), None);
        assert_eq!(parse_channel_mention("<#>"), None);
        assert_eq!(parse_channel_mention(""), None);
    }

    #[test]
    fn test_parse_delete_id() {
        assert_eq!(parse_delete_id("3"), Some(3));
        assert_eq!(parse_delete_id("  42  "), Some(42));
        assert_eq!(parse_delete_id("+7"), Some(7));
    }

    #[test]
    fn test_parse_delete_id_accepts_negative_ids() {
        // Negatives are numeric: they reach the id lookup and come back
        // not-found instead of aborting the flow
        assert_eq!(parse_delete_id("-1"), Some(-1));
        assert!(u64::try_from(parse_delete_id("-1").unwrap()).is_err());
    }

    #[test]
    fn test_parse_delete_id_rejects_non_numeric() {
        assert_eq!(parse_delete_id("abc"), None);
        assert_eq!(parse_delete_id("3.5"), None);
        assert_eq!(parse_delete_id(""), None);
    }
}
