//! filedrop-core: Pure file selection and upload logic (sans-IO).
//!
//! Models the drag-and-drop upload widget as data plus a transition
//! function:
//!
//! ```text
//! (Widget, Event) -> Vec<Effect>
//! ```
//!
//! The widget owns the current selection, the drop zone highlight, the
//! trigger's idle/busy state, and the status banner. Effects describe
//! what the browser layer must do next (start an upload, schedule a
//! banner hide, reset the file picker).
//!
//! This crate has **no browser dependencies** -- file handles arrive as
//! plain [`SelectedFile`] values and timers are represented by tokens.
//! All DOM interaction lives in `filedrop-io`.

pub mod banner;
pub mod icon;
pub mod messages;
pub mod size;
pub mod transport;
pub mod types;
pub mod widget;

pub use banner::{BANNER_VISIBLE, Banner, BannerToken, StatusKind};
pub use icon::FileIcon;
pub use messages::Messages;
pub use size::format_size;
pub use transport::{SIMULATED_UPLOAD_DELAY, Transport, UploadBatch, UploadError, UploadFuture};
pub use types::{DragKind, SelectedFile, Selection, SelectionSource};
pub use widget::{Effect, Event, TriggerState, Widget, WidgetError, ZoneState};
