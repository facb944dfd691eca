//! Dioxus UI components for filedrop.
//!
//! Provides the drop zone with its file picker, the selected file list,
//! the upload trigger button, the status banner, and the
//! [`UploadWidget`] that wires them to a [`Controller`](crate::Controller).

mod drop_zone;
mod file_list;
mod status_banner;
mod upload_button;
mod upload_widget;

pub use drop_zone::DropZone;
pub use file_list::FileList;
pub use status_banner::StatusBanner;
pub use upload_button::UploadButton;
pub use upload_widget::UploadWidget;
