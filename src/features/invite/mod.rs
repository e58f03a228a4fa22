//! # Invite Feature
//!
//! OAuth2 invite-URL construction with the bot's fixed permission set.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0
//! - **Toggleable**: false

use serenity::model::id::UserId;

/// Permission bits requested in invite links
///
/// Carried verbatim in the URL; the integer includes bits newer than the
/// `Permissions` bitflags in the pinned serenity, so it is not round-tripped
/// through that type.
pub const INVITE_PERMISSIONS: u64 = 563226979264576;

/// OAuth2 scopes requested in invite links
pub const INVITE_SCOPES: &str = "bot%20applications.commands";

/// Build the bot invite URL for the given application user id
pub fn invite_url(bot_id: UserId) -> String {
    format!(
        "https://discord.com/api/oauth2/authorize?client_id={bot_id}&permissions={INVITE_PERMISSIONS}&scope={INVITE_SCOPES}"
    )
}
