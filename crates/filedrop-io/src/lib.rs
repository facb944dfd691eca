//! filedrop-io: Browser I/O and Dioxus component library.
//!
//! Converts browser file handles into core values, suppresses the
//! browser's default drag-and-drop navigation, runs the simulated
//! upload on a timer, and provides the UI components that make up the
//! upload widget.

pub mod components;
pub mod controller;
pub mod document;
pub mod files;
pub mod locale;
pub mod transport;

pub use components::{DropZone, FileList, StatusBanner, UploadButton, UploadWidget};
pub use controller::Controller;
pub use transport::SimulatedTransport;
