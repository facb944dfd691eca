//! Timer-backed stand-in for a real upload.

use std::time::Duration;

use dioxus::logger::tracing::debug;
use filedrop_core::{SIMULATED_UPLOAD_DELAY, Transport, UploadBatch, UploadFuture};
use gloo_timers::future::TimeoutFuture;

/// A [`Transport`] that sends nothing.
///
/// Each upload waits for a fixed delay on the browser event loop and
/// then reports success. The wait yields, so the page stays responsive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl SimulatedTransport {
    /// Create a transport that waits `delay` per upload.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// The per-upload delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(SIMULATED_UPLOAD_DELAY)
    }
}

impl Transport for SimulatedTransport {
    fn upload(&self, batch: UploadBatch) -> UploadFuture {
        let millis = timeout_millis(self.delay);
        Box::pin(async move {
            debug!(
                files = batch.files.len(),
                bytes = batch.total_size(),
                "simulating upload"
            );
            TimeoutFuture::new(millis).await;
            Ok(())
        })
    }
}

/// Convert a duration to the `u32` milliseconds browser timers take,
/// saturating at `u32::MAX`.
pub(crate) fn timeout_millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}
