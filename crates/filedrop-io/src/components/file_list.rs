//! List of the currently selected files.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{
    LdFile, LdFileSpreadsheet, LdFileText, LdFileType, LdImage, LdMusic, LdVideo,
};
use filedrop_core::{FileIcon, SelectedFile};

/// Props for the [`FileList`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileListProps {
    /// Files to show, in selection order.
    files: Vec<SelectedFile>,
}

/// One row per selected file: type icon, name, and formatted size.
///
/// Names are rendered as text nodes, so markup in a file name shows up
/// literally instead of changing the page.
#[component]
pub fn FileList(props: FileListProps) -> Element {
    rsx! {
        ul { class: "file-list",
            for (index, file) in props.files.iter().enumerate() {
                li {
                    key: "{index}",
                    class: "file-item",
                    div { class: "file-info",
                        {render_icon(file.icon())}
                        div {
                            p { class: "file-name", "{file.name}" }
                            p { class: "file-size", "{file.display_size()}" }
                        }
                    }
                }
            }
        }
    }
}

/// Render the lucide icon for a file category.
///
/// The wrapper carries a `file-icon-<token>` class for per-type colors.
fn render_icon(icon: FileIcon) -> Element {
    let class = format!("file-icon file-icon-{}", icon.token());
    let size = 20;
    let glyph = match icon {
        FileIcon::Image => rsx! { Icon { icon: LdImage, width: size, height: size } },
        FileIcon::Video => rsx! { Icon { icon: LdVideo, width: size, height: size } },
        FileIcon::Audio => rsx! { Icon { icon: LdMusic, width: size, height: size } },
        FileIcon::Pdf => rsx! { Icon { icon: LdFileText, width: size, height: size } },
        FileIcon::Word => rsx! { Icon { icon: LdFileType, width: size, height: size } },
        FileIcon::Spreadsheet => {
            rsx! { Icon { icon: LdFileSpreadsheet, width: size, height: size } }
        }
        FileIcon::Generic => rsx! { Icon { icon: LdFile, width: size, height: size } },
    };

    rsx! {
        span { class: "{class}", title: "{icon}", {glyph} }
    }
}
