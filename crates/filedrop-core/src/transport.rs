//! Upload transport abstraction.
//!
//! The widget never performs I/O itself. When an upload starts it emits
//! [`Effect::StartUpload`](crate::Effect::StartUpload) with an
//! [`UploadBatch`]; the browser layer hands the batch to a [`Transport`]
//! and feeds the outcome back as
//! [`Event::UploadFinished`](crate::Event::UploadFinished).
//!
//! The bundled browser transport only waits [`SIMULATED_UPLOAD_DELAY`]
//! and reports success. A network-backed transport maps its failures
//! onto [`UploadError`].

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use crate::types::SelectedFile;

/// Fixed pause of the simulated upload.
pub const SIMULATED_UPLOAD_DELAY: Duration = Duration::from_millis(2000);

/// Snapshot of the files being uploaded.
///
/// Taken when the upload starts, so later selections do not change
/// what an in-flight upload sends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadBatch {
    /// Files in selection order.
    pub files: Vec<SelectedFile>,
}

impl UploadBatch {
    /// Total payload size in bytes.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }
}

/// Reasons an upload can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    /// The request never reached the server.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("server rejected upload with status {status}")]
    Rejected {
        /// HTTP status code.
        status: u16,
    },

    /// No answer arrived in time.
    #[error("upload timed out")]
    TimedOut,
}

/// Future returned by [`Transport::upload`].
///
/// Not `Send`: browser futures live on the single WASM thread.
pub type UploadFuture = Pin<Box<dyn Future<Output = Result<(), UploadError>>>>;

/// Something that can carry an [`UploadBatch`] somewhere.
pub trait Transport {
    /// Start uploading `batch`. The future resolves once the attempt is
    /// over, successfully or not.
    fn upload(&self, batch: UploadBatch) -> UploadFuture;
}
