//! Document-level drag suppression.
//!
//! Dropping a file anywhere outside the drop zone would make the
//! browser navigate to it. [`SuppressDocumentDrag`] registers listeners
//! on the document that cancel every drag event kind and removes them
//! again when dropped.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use filedrop_core::DragKind;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;

/// Errors that can occur when registering document listeners.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    /// A browser API call returned an error or an object was missing.
    #[error("browser API error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

/// Guard holding the document drag listeners.
///
/// The listeners stay registered for as long as the guard lives.
pub struct SuppressDocumentDrag {
    target: web_sys::EventTarget,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl SuppressDocumentDrag {
    /// Cancel default handling and propagation of `dragenter`,
    /// `dragover`, `dragleave`, and `drop` on the whole document.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Js`] if the window or document is unavailable
    /// or a listener cannot be added. Listeners added before the failure
    /// are removed again.
    pub fn install() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or_else(|| DomError::Js("no global window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| DomError::Js("no document".into()))?;

        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(|event: web_sys::Event| {
            event.prevent_default();
            event.stop_propagation();
        });

        // Constructed first so a partial registration is undone by Drop.
        let guard = Self {
            target: document.into(),
            callback,
        };
        for kind in DragKind::ALL {
            guard.target.add_event_listener_with_callback(
                kind.event_name(),
                guard.callback.as_ref().unchecked_ref(),
            )?;
        }
        Ok(guard)
    }
}

impl Drop for SuppressDocumentDrag {
    fn drop(&mut self) {
        for kind in DragKind::ALL {
            // Removing a listener that was never added is a no-op.
            let _ = self.target.remove_event_listener_with_callback(
                kind.event_name(),
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}
