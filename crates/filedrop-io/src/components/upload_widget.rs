//! The complete upload widget.

use std::rc::Rc;

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use filedrop_core::{
    DragKind, Event, Messages, SelectedFile, SelectionSource, Transport, Widget, ZoneState,
};

use super::{DropZone, FileList, StatusBanner, UploadButton};
use crate::controller::Controller;
use crate::document::SuppressDocumentDrag;

/// Props for the [`UploadWidget`] component.
#[derive(Props, Clone)]
pub struct UploadWidgetProps {
    /// Texts shown by the widget. Read once, when the widget mounts.
    messages: Messages,
    /// Where uploads go.
    transport: Rc<dyn Transport>,
}

impl PartialEq for UploadWidgetProps {
    fn eq(&self, other: &Self) -> bool {
        self.messages == other.messages && Rc::ptr_eq(&self.transport, &other.transport)
    }
}

/// Drop zone, file list, upload button, and status banner wired to one
/// [`Widget`] state machine.
///
/// While mounted, drag events are also cancelled on the whole document.
#[component]
pub fn UploadWidget(props: UploadWidgetProps) -> Element {
    let messages = props.messages;
    let widget = use_signal(move || Widget::new(messages));
    let mut picker = use_signal(|| Option::<web_sys::Element>::None);

    // Lives as long as the component; dropping it removes the listeners.
    use_hook(|| match SuppressDocumentDrag::install() {
        Ok(guard) => Some(Rc::new(guard)),
        Err(e) => {
            warn!("document drag suppression unavailable: {e}");
            None
        }
    });

    let controller = Controller::new(widget, picker, Rc::clone(&props.transport));
    let state = widget();
    let texts = state.messages();

    let on_drag = {
        let controller = controller.clone();
        move |kind: DragKind| controller.dispatch(Event::Drag(kind))
    };
    let on_files = {
        let controller = controller.clone();
        move |(source, files): (SelectionSource, Vec<SelectedFile>)| {
            controller.dispatch(Event::FilesSelected { source, files });
        }
    };
    let on_activate = move |()| controller.dispatch(Event::TriggerActivated);

    rsx! {
        div { class: "upload-widget",
            DropZone {
                highlighted: state.zone() == ZoneState::Highlighted,
                prompt: texts.drop_prompt.clone(),
                choose_label: texts.choose_files.clone(),
                on_drag: on_drag,
                on_files: on_files,
                on_picker_mounted: move |element: Option<web_sys::Element>| picker.set(element),
            }

            FileList {
                files: state.selection().files().to_vec(),
            }

            UploadButton {
                busy: state.is_busy(),
                label: state.trigger_label().to_owned(),
                on_activate: on_activate,
            }

            StatusBanner {
                banner: state.banner().cloned(),
            }
        }
    }
}
