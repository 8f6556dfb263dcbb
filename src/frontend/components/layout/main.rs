use crate::frontend::app::Route;
use crate::frontend::components::layout::NavigationBar;
use crate::frontend::services::context::AuthState;
use crate::frontend::services::navigation::Destination;
use crate::utils::AppConfig;
use dioxus::prelude::*;
use dioxus_router::{components::Outlet, navigator};

/// Header over the routed page. This is where the session and the router are
/// turned into the plain props the header expects.
#[component]
pub fn Layout() -> Element {
    let nav = navigator();
    let auth = use_context::<AuthState>();
    let config = use_context::<AppConfig>();

    rsx! {
        NavigationBar {
            is_authenticated: (auth.is_authenticated)(),
            brand: config.ui.brand.clone(),
            on_navigate: move |destination: Destination| {
                nav.push(destination.path());
            },
            on_logout: move |_| {
                let mut auth = auth;
                auth.logout();
            },
        }

        main { class: "container container-lg page",
            Outlet::<Route> {}
        }
    }
}
