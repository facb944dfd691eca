//! Drop zone with drag highlighting and a file picker.

use dioxus::html::HasFileData;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdUpload;
use filedrop_core::{DragKind, SelectedFile, SelectionSource};

use crate::files::selected_files;

/// Props for the [`DropZone`] component.
#[derive(Props, Clone, PartialEq)]
pub struct DropZoneProps {
    /// Whether a drag is currently over the zone.
    highlighted: bool,
    /// Prompt text inside the zone.
    prompt: String,
    /// Label of the file picker button.
    choose_label: String,
    /// Called for every drag event reaching the zone.
    on_drag: EventHandler<DragKind>,
    /// Called with the files from a drop or a picker change.
    on_files: EventHandler<(SelectionSource, Vec<SelectedFile>)>,
    /// Called with the picker `<input>` once it is mounted.
    on_picker_mounted: EventHandler<Option<web_sys::Element>>,
}

/// A drag-and-drop zone with a file picker button.
///
/// Every drag event has its default action and propagation cancelled,
/// so dropping files never navigates away from the page. Files from a
/// drop and from the picker are both reported through `on_files`;
/// nothing is filtered.
#[component]
pub fn DropZone(props: DropZoneProps) -> Element {
    let on_drag = props.on_drag;
    let on_files = props.on_files;
    let on_picker_mounted = props.on_picker_mounted;

    let handle_drop = move |evt: DragEvent| {
        suppress(&evt);
        on_drag.call(DragKind::Drop);
        on_files.call((SelectionSource::Drop, selected_files(&evt.files())));
    };

    let handle_change = move |evt: FormEvent| {
        on_files.call((SelectionSource::Picker, selected_files(&evt.files())));
    };

    let zone_class = if props.highlighted {
        "drop-zone drop-zone-active"
    } else {
        "drop-zone"
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragenter: move |evt| {
                suppress(&evt);
                on_drag.call(DragKind::Enter);
            },
            ondragover: move |evt| {
                suppress(&evt);
                on_drag.call(DragKind::Over);
            },
            ondragleave: move |evt| {
                suppress(&evt);
                on_drag.call(DragKind::Leave);
            },
            ondrop: handle_drop,

            Icon { class: "drop-zone-icon", icon: LdUpload, width: 40, height: 40 }

            p { class: "drop-zone-prompt", "{props.prompt}" }

            label { class: "btn btn-secondary",
                input {
                    r#type: "file",
                    multiple: true,
                    class: "hidden",
                    onmounted: move |evt| {
                        on_picker_mounted.call(evt.data().downcast::<web_sys::Element>().cloned());
                    },
                    onchange: handle_change,
                }
                "{props.choose_label}"
            }
        }
    }
}

/// Cancel the browser's default drag handling and stop propagation.
fn suppress(evt: &DragEvent) {
    evt.prevent_default();
    evt.stop_propagation();
}
