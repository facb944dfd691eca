//! Runs the core state machine against the browser.
//!
//! [`Controller`] owns handles to everything a transition can touch:
//! the widget state signal, the file picker element, and the upload
//! transport. Every UI handler goes through
//! [`dispatch`](Controller::dispatch), which applies the event and then
//! carries out the returned effects on the Dioxus runtime.

use std::rc::Rc;

use dioxus::logger::tracing::{debug, info, warn};
use dioxus::prelude::*;
use filedrop_core::{Effect, Event, Transport, Widget};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;

use crate::transport::timeout_millis;

/// Event dispatcher for one upload widget.
///
/// Cheap to clone: signals are `Copy` and the transport is shared.
#[derive(Clone)]
pub struct Controller {
    widget: Signal<Widget>,
    picker: Signal<Option<web_sys::Element>>,
    transport: Rc<dyn Transport>,
}

impl Controller {
    /// Bind a controller to its state and collaborators.
    #[must_use]
    pub fn new(
        widget: Signal<Widget>,
        picker: Signal<Option<web_sys::Element>>,
        transport: Rc<dyn Transport>,
    ) -> Self {
        Self {
            widget,
            picker,
            transport,
        }
    }

    /// Apply `event` and run its effects.
    ///
    /// Rejected transitions are logged and otherwise ignored.
    pub fn dispatch(&self, event: Event) {
        if let Event::FilesSelected { source, files } = &event {
            debug!(?source, count = files.len(), "files selected");
        }

        let mut widget = self.widget;
        let outcome = widget.write().handle(event);
        match outcome {
            Ok(effects) => {
                for effect in effects {
                    self.run(effect);
                }
            }
            Err(e) => warn!("ignored widget event: {e}"),
        }
    }

    fn run(&self, effect: Effect) {
        match effect {
            Effect::ScheduleBannerHide { token, after } => {
                let controller = self.clone();
                let millis = timeout_millis(after);
                spawn(async move {
                    TimeoutFuture::new(millis).await;
                    controller.dispatch(Event::BannerExpired(token));
                });
            }
            Effect::StartUpload(batch) => {
                info!(
                    files = batch.files.len(),
                    bytes = batch.total_size(),
                    "upload started"
                );
                let upload = self.transport.upload(batch);
                let controller = self.clone();
                spawn(async move {
                    let outcome = upload.await;
                    match &outcome {
                        Ok(()) => info!("upload finished"),
                        Err(e) => warn!("upload failed: {e}"),
                    }
                    controller.dispatch(Event::UploadFinished(outcome));
                });
            }
            Effect::ResetPicker => self.reset_picker(),
        }
    }

    /// Clear the picker's stored files so choosing the same files again
    /// fires a fresh change event.
    fn reset_picker(&self) {
        let picker = self.picker.peek();
        let Some(element) = &*picker else {
            debug!("file picker not mounted; nothing to reset");
            return;
        };
        match element.dyn_ref::<web_sys::HtmlInputElement>() {
            Some(input) => input.set_value(""),
            None => warn!("file picker element is not an <input>"),
        }
    }
}
