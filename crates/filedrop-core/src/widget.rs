//! The upload widget state machine.
//!
//! [`Widget::handle`] takes one [`Event`] and returns the [`Effect`]s
//! the browser layer must carry out. Nothing here touches the DOM or
//! sleeps, so every transition is testable with plain values:
//!
//! ```rust
//! # use filedrop_core::{Effect, Event, Messages, SelectedFile, SelectionSource, Widget};
//! # fn run() -> Result<(), filedrop_core::WidgetError> {
//! let mut widget = Widget::new(Messages::english());
//! widget.handle(Event::FilesSelected {
//!     source: SelectionSource::Picker,
//!     files: vec![SelectedFile::new("notes.txt", 12, "text/plain")],
//! })?;
//!
//! let effects = widget.handle(Event::TriggerActivated)?;
//! assert!(widget.is_busy());
//! assert!(matches!(effects[..], [Effect::StartUpload(_)]));
//! # Ok(())
//! # }
//! ```
//!
//! # Trigger
//!
//! ```text
//!            TriggerActivated (selection non-empty)
//!   Idle ───────────────────────────────────────────▶ Busy
//!    ▲                                                 │
//!    └──────────── UploadFinished(Ok | Err) ───────────┘
//! ```
//!
//! `TriggerActivated` while busy is rejected with [`WidgetError::Busy`]
//! even though the button is also disabled in the UI.

use std::time::Duration;

use crate::banner::{BANNER_VISIBLE, Banner, BannerToken, StatusKind};
use crate::messages::Messages;
use crate::transport::{UploadBatch, UploadError};
use crate::types::{DragKind, SelectedFile, Selection, SelectionSource};

/// Visual state of the drop zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ZoneState {
    /// No drag over the zone.
    #[default]
    Normal,
    /// A drag is active over the zone.
    Highlighted,
}

impl ZoneState {
    /// State after a drag event of `kind`.
    ///
    /// Depends only on the event, never on the previous state.
    #[must_use]
    pub const fn after(self, kind: DragKind) -> Self {
        if kind.highlights() {
            Self::Highlighted
        } else {
            Self::Normal
        }
    }
}

/// Whether the upload trigger accepts activation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TriggerState {
    /// Ready for activation.
    #[default]
    Idle,
    /// An upload is in flight; activation is refused.
    Busy,
}

/// Inputs to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A drag event reached the drop zone.
    Drag(DragKind),
    /// Files arrived from a drop or from the picker.
    FilesSelected {
        /// Where the files came from.
        source: SelectionSource,
        /// The new selection, in order.
        files: Vec<SelectedFile>,
    },
    /// The user activated the upload trigger.
    TriggerActivated,
    /// The transport finished the current upload.
    UploadFinished(Result<(), UploadError>),
    /// A banner hide timer fired.
    BannerExpired(BannerToken),
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fire [`Event::BannerExpired`] with `token` after `after`.
    ScheduleBannerHide {
        /// Token of the banner to hide.
        token: BannerToken,
        /// Delay before hiding.
        after: Duration,
    },
    /// Hand the batch to the transport, then fire
    /// [`Event::UploadFinished`].
    StartUpload(UploadBatch),
    /// Clear the file picker's stored selection.
    ResetPicker,
}

/// Transitions the state machine refuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    /// The trigger was activated while an upload is running.
    #[error("an upload is already in progress")]
    Busy,

    /// An upload result arrived while no upload was running.
    #[error("upload finished but none was in progress")]
    NotUploading,
}

/// The complete state of one upload widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    messages: Messages,
    selection: Selection,
    zone: ZoneState,
    trigger: TriggerState,
    banner: Option<Banner>,
    last_token: BannerToken,
}

impl Widget {
    /// Create an idle widget with an empty selection.
    #[must_use]
    pub fn new(messages: Messages) -> Self {
        Self {
            messages,
            selection: Selection::default(),
            zone: ZoneState::default(),
            trigger: TriggerState::default(),
            banner: None,
            last_token: BannerToken::default(),
        }
    }

    /// Texts in use.
    #[must_use]
    pub const fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Current selection.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Current drop zone state.
    #[must_use]
    pub const fn zone(&self) -> ZoneState {
        self.zone
    }

    /// Current trigger state.
    #[must_use]
    pub const fn trigger(&self) -> TriggerState {
        self.trigger
    }

    /// Returns `true` while an upload is in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        matches!(self.trigger, TriggerState::Busy)
    }

    /// The visible banner, if any.
    #[must_use]
    pub const fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Label for the trigger in its current state.
    #[must_use]
    pub fn trigger_label(&self) -> &str {
        match self.trigger {
            TriggerState::Idle => &self.messages.upload_label,
            TriggerState::Busy => &self.messages.uploading_label,
        }
    }

    /// Apply `event` and return the effects to run.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Busy`] for [`Event::TriggerActivated`]
    /// during an upload, and [`WidgetError::NotUploading`] for
    /// [`Event::UploadFinished`] while idle. The state is left untouched
    /// in both cases.
    pub fn handle(&mut self, event: Event) -> Result<Vec<Effect>, WidgetError> {
        match event {
            Event::Drag(kind) => {
                self.zone = self.zone.after(kind);
                Ok(Vec::new())
            }
            Event::FilesSelected { source, files } => {
                self.selection.replace(source, files);
                Ok(Vec::new())
            }
            Event::TriggerActivated => self.activate(),
            Event::UploadFinished(outcome) => self.finish(outcome),
            Event::BannerExpired(token) => {
                if self.banner.as_ref().is_some_and(|b| b.token == token) {
                    self.banner = None;
                }
                Ok(Vec::new())
            }
        }
    }

    /// Show a banner and return the effect that will hide it.
    ///
    /// A newer banner replaces the text immediately. Hide timers of
    /// older banners no longer match and are ignored when they fire.
    pub fn show_status(&mut self, message: impl Into<String>, kind: StatusKind) -> Effect {
        self.last_token = self.last_token.next();
        let token = self.last_token;
        self.banner = Some(Banner {
            message: message.into(),
            kind,
            token,
        });
        Effect::ScheduleBannerHide {
            token,
            after: BANNER_VISIBLE,
        }
    }

    fn activate(&mut self) -> Result<Vec<Effect>, WidgetError> {
        if self.is_busy() {
            return Err(WidgetError::Busy);
        }
        if self.selection.is_empty() {
            let message = self.messages.choose_file_first.clone();
            return Ok(vec![self.show_status(message, StatusKind::Error)]);
        }

        self.trigger = TriggerState::Busy;
        let batch = UploadBatch {
            files: self.selection.files().to_vec(),
        };
        Ok(vec![Effect::StartUpload(batch)])
    }

    fn finish(&mut self, outcome: Result<(), UploadError>) -> Result<Vec<Effect>, WidgetError> {
        if !self.is_busy() {
            return Err(WidgetError::NotUploading);
        }
        self.trigger = TriggerState::Idle;

        match outcome {
            Ok(()) => {
                self.selection.clear();
                let message = self.messages.upload_succeeded.clone();
                let hide = self.show_status(message, StatusKind::Success);
                Ok(vec![hide, Effect::ResetPicker])
            }
            Err(_) => {
                // Selection is kept so the user can retry.
                let message = self.messages.upload_failed.clone();
                Ok(vec![self.show_status(message, StatusKind::Error)])
            }
        }
    }
}

impl Default for Widget {
    fn default() -> Self {
        Self::new(Messages::default())
    }
}
