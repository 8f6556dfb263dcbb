use crate::frontend::services::navigation::Destination;
use dioxus::prelude::*;
use dioxus_router::navigator;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = navigator();
    let path = format!("/{}", segments.join("/"));

    use_hook({
        let path = path.clone();
        move || log::warn!("No route for {path}")
    });

    rsx! {
        section { class: "hero",
            h1 { class: "title", "Page not found" }
            p { class: "hero-tagline", "Nothing lives at {path}." }
            button {
                class: "button button-default",
                r#type: "button",
                onclick: move |_| {
                    nav.push(Destination::Home.path());
                },
                "Back home"
            }
        }
    }
}
