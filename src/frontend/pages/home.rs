use crate::frontend::services::context::AuthState;
use crate::frontend::services::navigation::Destination;
use crate::utils::AppConfig;
use dioxus::prelude::*;
use dioxus_router::navigator;

#[component]
pub fn Home() -> Element {
    let nav = navigator();
    let auth = use_context::<AuthState>();
    let config = use_context::<AppConfig>();

    let (cta, destination) = if (auth.is_authenticated)() {
        ("Open dashboard", Destination::Dashboard)
    } else {
        ("Get started", Destination::Register)
    };

    rsx! {
        section { class: "hero",
            h1 { class: "title", "{config.ui.brand}" }
            p { class: "hero-tagline", "Create, style, and download QR codes in seconds." }
            button {
                class: "button button-filled",
                r#type: "button",
                onclick: move |_| {
                    nav.push(destination.path());
                },
                "{cta}"
            }
        }
    }
}
