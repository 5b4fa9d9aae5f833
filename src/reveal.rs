//! Typed reveal of already-complete text.
//!
//! The relay answers with whole strings; the terminal shows them arriving
//! character by character anyway. [`reveal`] turns a complete string into a
//! time-paced stream of progressively longer prefixes, one character per
//! tick. The data is fully known before the first tick; this is display
//! pacing only.
//!
//! Every invocation is an independent one-shot sequence. Dropping the
//! stream (or aborting a [`RevealTask`]) cancels at a tick boundary and
//! nothing further is emitted.

use std::time::Duration;

use futures::Stream;
use futures::stream::{self, StreamExt};
use tokio::task::JoinHandle;

use crate::observability::{REVEAL_STARTS, REVEAL_TICKS};

/// Default pacing between prefix emissions.
pub const DEFAULT_REVEAL_INTERVAL: Duration = Duration::from_millis(20);

/// Byte offsets at which each successive one-character-longer prefix ends.
///
/// Offsets always fall on char boundaries, so multi-byte characters are
/// never split mid-sequence.
fn prefix_ends(text: &str) -> Vec<usize> {
    let mut ends: Vec<usize> = text.char_indices().skip(1).map(|(i, _)| i).collect();
    if !text.is_empty() {
        ends.push(text.len());
    }
    ends
}

/// Produces prefixes of `text` of length 1, 2, ... chars, one per
/// `interval` tick, ending with the full string exactly once.
///
/// An empty input yields an empty stream. The stream holds no state
/// outside itself; dropping it before completion emits nothing further.
pub fn reveal(text: &str, interval: Duration) -> impl Stream<Item = String> + use<> {
    REVEAL_STARTS.click();
    let text = text.to_string();
    let ends = prefix_ends(&text);

    stream::unfold((text, ends, 0usize), move |(text, ends, idx)| async move {
        if idx >= ends.len() {
            return None;
        }
        tokio::time::sleep(interval).await;
        REVEAL_TICKS.click();
        let prefix = text[..ends[idx]].to_string();
        Some((prefix, (text, ends, idx + 1)))
    })
}

/// A reveal running as its own cancellable task.
///
/// The task owns all reveal state; cancelling it aborts at the next tick
/// boundary and the `emit` callback is never invoked again. Dropping the
/// handle cancels too, so a task keyed to a display slot cannot outlive
/// the slot.
pub struct RevealTask {
    handle: JoinHandle<()>,
}

impl RevealTask {
    /// Spawns a reveal of `text`, invoking `emit` with each prefix.
    pub fn spawn<F>(text: &str, interval: Duration, mut emit: F) -> Self
    where
        F: FnMut(String) + Send + 'static,
    {
        let stream = reveal(text, interval);
        let handle = tokio::spawn(async move {
            futures::pin_mut!(stream);
            while let Some(prefix) = stream.next().await {
                emit(prefix);
            }
        });
        Self { handle }
    }

    /// Cancels the reveal. No prefixes are emitted after this returns
    /// and the task has been observed to stop.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Returns true once the reveal has finished or been cancelled.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the reveal to finish or acknowledge cancellation.
    pub async fn join(mut self) {
        let _ = (&mut self.handle).await;
    }
}

impl Drop for RevealTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
