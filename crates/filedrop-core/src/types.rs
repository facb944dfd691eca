//! Shared types for the filedrop selection model.

use serde::{Deserialize, Serialize};

use crate::icon::FileIcon;
use crate::size::format_size;

/// A file chosen by the user, reduced to the metadata the widget shows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectedFile {
    /// File name as reported by the browser, without any path.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME type. Empty when the browser could not determine one.
    pub mime_type: String,
}

impl SelectedFile {
    /// Create a new selected file.
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }

    /// Icon category derived from the MIME type.
    #[must_use]
    pub fn icon(&self) -> FileIcon {
        FileIcon::for_mime(&self.mime_type)
    }

    /// Human-readable size, e.g. `"1.5 KB"`.
    #[must_use]
    pub fn display_size(&self) -> String {
        format_size(self.size)
    }
}

/// Where a selection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionSource {
    /// Files dropped onto the drop zone.
    Drop,
    /// Files chosen through the file picker input.
    Picker,
}

/// The ordered set of files currently chosen by the user.
///
/// Every intake replaces the whole set; selections are never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    files: Vec<SelectedFile>,
    source: Option<SelectionSource>,
}

impl Selection {
    /// Replace the current selection with `files` from `source`.
    pub fn replace(&mut self, source: SelectionSource, files: Vec<SelectedFile>) {
        self.files = files;
        self.source = Some(source);
    }

    /// Drop every file from the selection.
    pub fn clear(&mut self) {
        self.files.clear();
        self.source = None;
    }

    /// Returns `true` if no file is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Number of selected files.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.files.len()
    }

    /// The selected files in intake order.
    #[must_use]
    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    /// Source of the most recent intake, or `None` when cleared.
    #[must_use]
    pub const fn source(&self) -> Option<SelectionSource> {
        self.source
    }

    /// Total size of all selected files in bytes.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }
}

/// Drag event kinds the drop zone reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragKind {
    /// `dragenter`
    Enter,
    /// `dragover`
    Over,
    /// `dragleave`
    Leave,
    /// `drop`
    Drop,
}

impl DragKind {
    /// Every intercepted drag event kind.
    pub const ALL: [Self; 4] = [Self::Enter, Self::Over, Self::Leave, Self::Drop];

    /// DOM event name for this kind.
    #[must_use]
    pub const fn event_name(self) -> &'static str {
        match self {
            Self::Enter => "dragenter",
            Self::Over => "dragover",
            Self::Leave => "dragleave",
            Self::Drop => "drop",
        }
    }

    /// Whether this event puts the drop zone into its highlighted state.
    #[must_use]
    pub const fn highlights(self) -> bool {
        matches!(self, Self::Enter | Self::Over)
    }
}
