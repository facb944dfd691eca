//! Icon categories derived from MIME types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Icon category shown next to a file in the selection list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileIcon {
    /// `image/*`
    Image,
    /// `video/*`
    Video,
    /// `audio/*`
    Audio,
    /// Any type mentioning `pdf`.
    Pdf,
    /// Any type mentioning `word` (Word documents).
    Word,
    /// Any type mentioning `excel` or `spreadsheet`.
    Spreadsheet,
    /// Everything else, including an empty type.
    Generic,
}

impl FileIcon {
    /// Every icon category in match precedence order.
    pub const ALL: [Self; 7] = [
        Self::Image,
        Self::Video,
        Self::Audio,
        Self::Pdf,
        Self::Word,
        Self::Spreadsheet,
        Self::Generic,
    ];

    /// Pick the icon for a MIME type.
    ///
    /// Rules are checked in order and the first match wins, so
    /// `image/x-pdf-preview` is an [`Image`](Self::Image), not a
    /// [`Pdf`](Self::Pdf). Matching ignores ASCII case.
    #[must_use]
    pub fn for_mime(mime_type: &str) -> Self {
        let mime = mime_type.to_ascii_lowercase();
        if mime.starts_with("image/") {
            Self::Image
        } else if mime.starts_with("video/") {
            Self::Video
        } else if mime.starts_with("audio/") {
            Self::Audio
        } else if mime.contains("pdf") {
            Self::Pdf
        } else if mime.contains("word") {
            Self::Word
        } else if mime.contains("excel") || mime.contains("spreadsheet") {
            Self::Spreadsheet
        } else {
            Self::Generic
        }
    }

    /// Class-name-like token for styling, e.g. `"pdf"`.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Pdf => "pdf",
            Self::Word => "word",
            Self::Spreadsheet => "spreadsheet",
            Self::Generic => "file",
        }
    }
}

impl fmt::Display for FileIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
