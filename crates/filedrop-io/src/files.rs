//! Conversion from browser file handles to core values.

use dioxus::html::FileData;
use filedrop_core::SelectedFile;

/// Reduce browser file handles to the metadata the widget shows.
///
/// Order is preserved and nothing is filtered out. Files the browser
/// reports without a MIME type get an empty one.
#[must_use]
pub fn selected_files(files: &[FileData]) -> Vec<SelectedFile> {
    files.iter().map(selected_file).collect()
}

fn selected_file(file: &FileData) -> SelectedFile {
    SelectedFile::new(
        file.name(),
        file.size(),
        file.content_type().unwrap_or_default(),
    )
}
