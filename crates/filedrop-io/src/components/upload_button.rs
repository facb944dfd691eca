//! Upload trigger button.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdLoaderCircle;

/// Props for the [`UploadButton`] component.
#[derive(Props, Clone, PartialEq)]
pub struct UploadButtonProps {
    /// Whether an upload is running. Disables the button.
    busy: bool,
    /// Button text for the current state.
    label: String,
    /// Called when the user activates the button.
    on_activate: EventHandler<()>,
}

/// The button that starts an upload.
///
/// While busy the button is disabled and shows a spinner next to the
/// busy label.
#[component]
pub fn UploadButton(props: UploadButtonProps) -> Element {
    let busy = props.busy;
    let on_activate = props.on_activate;

    rsx! {
        button {
            class: "btn btn-primary upload-button",
            r#type: "button",
            disabled: busy,
            "aria-busy": "{busy}",
            onclick: move |_| {
                if !busy {
                    on_activate.call(());
                }
            },
            if busy {
                Icon { class: "spin", icon: LdLoaderCircle, width: 18, height: 18 }
            }
            "{props.label}"
        }
    }
}
