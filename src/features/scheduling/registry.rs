//! In-memory registry of pending scheduled messages
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use serenity::model::id::ChannelId;
use serenity::model::mention::Mentionable;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use super::clock::DATE_TIME_FORMAT;
use super::job::JobHandle;
use crate::core::response::truncate_chars;

/// Characters of message content shown in listings
const CONTENT_PREVIEW_CHARS: usize = 30;

/// One pending future send
///
/// Immutable once created; the only mutation is removal from the registry,
/// either by the job after firing or by the user via the delete flow.
#[derive(Clone)]
pub struct ScheduledMessage {
    /// Unique, monotonically assigned, never reused within the process
    pub id: u64,
    /// Display name of the requesting user (informational only)
    pub author: String,
    /// Text sent verbatim at fire time
    pub content: String,
    /// Absolute fire time, normalized to UTC
    pub scheduled_at: DateTime<Utc>,
    /// Destination channel, owned by the Discord client
    pub channel_id: ChannelId,
    /// Cancellation handle for the associated send task
    pub job: JobHandle,
}

impl ScheduledMessage {
    /// One listing line: id, author, time in GMT, channel mention, content preview
    pub fn summary_line(&self) -> String {
        format!(
            "ID {} by {} at {} GMT in {}: {}...",
            self.id,
            self.author,
            self.scheduled_at.format(DATE_TIME_FORMAT),
            self.channel_id.mention(),
            truncate_chars(&self.content, CONTENT_PREVIEW_CHARS),
        )
    }
}

/// Registry of pending scheduled messages
///
/// Entries keep insertion order for deterministic listings. All access goes
/// through a mutex: job completion and user-driven deletion run on different
/// runtime threads and can race on removal. The lock is never held across an
/// await point.
pub struct ScheduleRegistry {
    entries: Mutex<Vec<ScheduledMessage>>,
    next_id: AtomicU64,
}

impl ScheduleRegistry {
    /// Create an empty registry; ids start at 1
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    fn entries(&self) -> MutexGuard<'_, Vec<ScheduledMessage>> {
        // A poisoned lock only means another thread panicked mid-operation;
        // the Vec itself is still structurally sound
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Fresh id, strictly increasing for the process lifetime, never reused
    pub fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Add a new entry
    ///
    /// A duplicate id is an internal invariant violation (ids are assigned
    /// monotonically) and is reported as an error rather than overwriting.
    pub fn insert(&self, entry: ScheduledMessage) -> Result<()> {
        let mut entries = self.entries();
        if entries.iter().any(|e| e.id == entry.id) {
            bail!("duplicate scheduled message id {}", entry.id);
        }
        entries.push(entry);
        Ok(())
    }

    /// Remove the entry with the given id; false when absent
    pub fn remove(&self, id: u64) -> bool {
        let mut entries = self.entries();
        match entries.iter().position(|e| e.id == id) {
            Some(idx) => {
                entries.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Cancel the entry's job and remove it; false when absent
    ///
    /// Performed under one lock acquisition so the job cannot fire between
    /// the cancel and the removal.
    pub fn cancel(&self, id: u64) -> bool {
        let mut entries = self.entries();
        match entries.iter().position(|e| e.id == id) {
            Some(idx) => {
                entries[idx].job.cancel();
                entries.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Snapshot of all entries in insertion order
    pub fn list(&self) -> Vec<ScheduledMessage> {
        self.entries().clone()
    }

    /// Whether there are no pending entries
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

impl Default for ScheduleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
