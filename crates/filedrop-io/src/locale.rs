//! Browser language detection.

use dioxus::logger::tracing::debug;
use filedrop_core::Messages;

/// Built-in texts matching `navigator.language`.
///
/// Falls back to [`Messages::default`] when the language is unknown or
/// no browser window is available.
#[must_use]
pub fn browser_messages() -> Messages {
    let language = web_sys::window().and_then(|w| w.navigator().language());
    debug!(?language, "selecting widget texts");
    language.map_or_else(Messages::default, |tag| Messages::for_language(&tag))
}
