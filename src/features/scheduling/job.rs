//! Delayed send jobs
//!
//! One background task per scheduled message: sleep until the target time,
//! send once, deregister. Cancellation aborts the sleep; the canceller (not
//! the job) removes the registry entry.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Gate job start on entry registration
//! - 1.0.0: Initial creation

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{error, info};
use serenity::http::Http;
use serenity::model::id::ChannelId;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::AbortHandle;

use super::registry::{ScheduleRegistry, ScheduledMessage};

/// Destination for a scheduled send
///
/// The seam between the scheduling core and the Discord client; tests swap in
/// a recording implementation.
#[async_trait]
pub trait ChannelSink: Send + Sync {
    /// Send one text message to the destination
    async fn send(&self, content: &str) -> Result<()>;
}

/// Sends to a Discord channel over the REST API
pub struct DiscordChannelSink {
    http: Arc<Http>,
    channel_id: ChannelId,
}

impl DiscordChannelSink {
    pub fn new(http: Arc<Http>, channel_id: ChannelId) -> Self {
        Self { http, channel_id }
    }
}

#[async_trait]
impl ChannelSink for DiscordChannelSink {
    async fn send(&self, content: &str) -> Result<()> {
        self.channel_id.say(&self.http, content).await?;
        Ok(())
    }
}

/// Cancellation handle for one delayed send task
///
/// Cancelling an already-fired or already-cancelled job is a no-op.
#[derive(Clone)]
pub struct JobHandle {
    inner: AbortHandle,
}

impl JobHandle {
    pub(crate) fn new(inner: AbortHandle) -> Self {
        Self { inner }
    }

    /// Abort the task if it has not completed yet
    pub fn cancel(&self) {
        self.inner.abort();
    }

    /// Whether the task has run to completion (fired) or been aborted
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }
}

/// Create, register, and arm the delayed send for a new scheduled message
///
/// Assigns a fresh id, spawns the send task, inserts the registry entry, and
/// only then arms the task. The task cannot fire before its entry is
/// registered: without that ordering a target time that elapsed while earlier
/// prompts were pending would fire and self-remove before the insert, leaving
/// an entry behind with no live job.
///
/// Returns the assigned id.
pub fn schedule_send(
    registry: &Arc<ScheduleRegistry>,
    author: String,
    content: String,
    scheduled_at: DateTime<Utc>,
    channel_id: ChannelId,
    sink: Arc<dyn ChannelSink>,
) -> Result<u64> {
    let id = registry.next_id();
    let (armed_tx, armed_rx) = oneshot::channel();

    let task = tokio::spawn(run_send_job(
        Arc::clone(registry),
        id,
        scheduled_at,
        content.clone(),
        sink,
        armed_rx,
    ));
    let job = JobHandle::new(task.abort_handle());

    registry.insert(ScheduledMessage {
        id,
        author,
        content,
        scheduled_at,
        channel_id,
        job,
    })?;

    // The entry is visible now; let the job start counting down. A send
    // failure here only means the task was already cancelled.
    let _ = armed_tx.send(());
    Ok(id)
}

/// The delayed send task
///
/// Waits to be armed, sleeps for `scheduled_at - now` (no-op if already
/// elapsed), performs exactly one send, then removes its own registry entry
/// by id. The entry is removed even when the send fails; the failure is
/// logged and not retried.
async fn run_send_job(
    registry: Arc<ScheduleRegistry>,
    id: u64,
    scheduled_at: DateTime<Utc>,
    content: String,
    sink: Arc<dyn ChannelSink>,
    armed: oneshot::Receiver<()>,
) {
    // A dropped sender means registration failed; the message was never
    // scheduled and there is nothing to send or remove
    if armed.await.is_err() {
        return;
    }

    let delay = (scheduled_at - Utc::now()).to_std().unwrap_or_default();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    match sink.send(&content).await {
        Ok(()) => info!("Scheduled message {id} sent"),
        Err(e) => error!("Scheduled message {id} failed to send: {e}"),
    }

    registry.remove(id);
}
