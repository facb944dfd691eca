//! Transient status message.

use dioxus::prelude::*;
use filedrop_core::Banner;

/// Props for the [`StatusBanner`] component.
#[derive(Props, Clone, PartialEq)]
pub struct StatusBannerProps {
    /// The banner to show. `None` renders nothing.
    banner: Option<Banner>,
}

/// Success or error message below the upload button.
#[component]
pub fn StatusBanner(props: StatusBannerProps) -> Element {
    let Some(banner) = props.banner else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "status-banner {banner.kind.style_class()}",
            role: "status",
            "{banner.message}"
        }
    }
}
