use std::rc::Rc;

use dioxus::prelude::*;
use filedrop_core::Transport;
use filedrop_io::{SimulatedTransport, UploadWidget};

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Picks the widget texts from the browser language once and mounts a
/// single upload widget backed by the simulated transport.
fn app() -> Element {
    let messages = use_hook(filedrop_io::locale::browser_messages);
    let transport = use_hook(|| Rc::new(SimulatedTransport::default()) as Rc<dyn Transport>);

    rsx! {
        // Page styles, including the drop zone highlight and banner colors.
        style { dangerous_inner_html: include_str!("../assets/main.css") }

        div { class: "min-h-screen flex items-center justify-center p-6",
            div { class: "card",
                header { class: "mb-6 text-center",
                    h1 { class: "title", "filedrop" }
                }

                UploadWidget {
                    messages: messages,
                    transport: transport,
                }
            }
        }
    }
}
