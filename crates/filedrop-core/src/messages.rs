//! User-facing texts.
//!
//! Every string the widget shows comes from [`Messages`], so a page can
//! swap languages without touching the components. Indonesian is the
//! default; English is built in. Partial JSON/TOML overrides work
//! because missing fields fall back to the default set.

use serde::{Deserialize, Serialize};

/// Localized texts for the upload widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Prompt inside the drop zone.
    pub drop_prompt: String,
    /// Label of the file picker button.
    pub choose_files: String,
    /// Trigger label while idle.
    pub upload_label: String,
    /// Trigger label while an upload is running.
    pub uploading_label: String,
    /// Banner shown when the trigger is used with nothing selected.
    pub choose_file_first: String,
    /// Banner shown after a successful upload.
    pub upload_succeeded: String,
    /// Banner shown after a failed upload.
    pub upload_failed: String,
}

impl Messages {
    /// Indonesian texts.
    #[must_use]
    pub fn indonesian() -> Self {
        Self {
            drop_prompt: "Seret dan lepas file di sini".into(),
            choose_files: "Pilih File".into(),
            upload_label: "Upload File".into(),
            uploading_label: "Mengupload...".into(),
            choose_file_first: "Pilih file terlebih dahulu!".into(),
            upload_succeeded: "File berhasil diupload!".into(),
            upload_failed: "Gagal mengupload file. Silakan coba lagi.".into(),
        }
    }

    /// English texts.
    #[must_use]
    pub fn english() -> Self {
        Self {
            drop_prompt: "Drag and drop files here".into(),
            choose_files: "Choose Files".into(),
            upload_label: "Upload Files".into(),
            uploading_label: "Uploading...".into(),
            choose_file_first: "Choose a file first!".into(),
            upload_succeeded: "Files uploaded successfully!".into(),
            upload_failed: "Failed to upload files. Please try again.".into(),
        }
    }

    /// Pick a built-in set for a BCP-47 language tag such as `"en-US"`.
    ///
    /// Only the primary subtag is considered. Unknown languages get the
    /// default set.
    #[must_use]
    pub fn for_language(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("en") {
            Self::english()
        } else {
            Self::default()
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::indonesian()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_is_indonesian() {
        assert_eq!(Messages::default(), Messages::indonesian());
        assert_eq!(
            Messages::default().choose_file_first,
            "Pilih file terlebih dahulu!"
        );
    }

    #[test]
    fn language_tag_selects_by_primary_subtag() {
        assert_eq!(Messages::for_language("en"), Messages::english());
        assert_eq!(Messages::for_language("en-GB"), Messages::english());
        assert_eq!(Messages::for_language("EN_us"), Messages::english());
        assert_eq!(Messages::for_language("id-ID"), Messages::indonesian());
    }

    #[test]
    fn unknown_or_empty_tag_uses_default() {
        assert_eq!(Messages::for_language("fr-FR"), Messages::default());
        assert_eq!(Messages::for_language(""), Messages::default());
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let json = r#"{ "upload_label": "Kirim" }"#;
        let messages: Messages = serde_json::from_str(json).unwrap();
        assert_eq!(messages.upload_label, "Kirim");
        assert_eq!(messages.uploading_label, Messages::default().uploading_label);
    }
}
