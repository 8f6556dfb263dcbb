//! Dashboard page component with authentication guard.

use crate::frontend::services::context::AuthState;
use crate::frontend::services::navigation::Destination;
use dioxus::prelude::*;
use dioxus_router::navigator;

#[component]
pub fn Dashboard() -> Element {
    let nav = navigator();
    let auth = use_context::<AuthState>();

    if !(auth.is_authenticated)() {
        nav.replace(Destination::Login.path());
        return rsx! { div {} };
    }

    rsx! {
        DashboardView {
            username: auth.username(),
            on_logout: move |_| {
                let mut auth = auth;
                auth.logout();
            },
        }
    }
}

/// Signed-in landing panel. Logout goes straight to `on_logout`, once per click.
#[component]
pub fn DashboardView(
    on_logout: EventHandler,
    #[props(default)] username: Option<String>,
) -> Element {
    rsx! {
        div { class: "paper paper-bordered",
            div { class: "panel-header",
                h2 { class: "title", "Dashboard" }
                button {
                    class: "button button-light button-danger",
                    r#type: "button",
                    onclick: move |_| sign_out(on_logout),
                    "Logout"
                }
            }

            h3 { class: "welcome", "Welcome to your QR code workspace!" }

            if let Some(username) = username {
                p { class: "signed-in-as", "Signed in as {username}" }
            }
        }
    }
}

fn sign_out(on_logout: EventHandler) {
    log::debug!("Logout requested from dashboard");
    on_logout.call(());
}
