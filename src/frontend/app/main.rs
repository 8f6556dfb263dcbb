//! Application routing system.

use crate::frontend::assets::ResourceLoader;
use crate::frontend::components::layout::Layout;
use crate::frontend::pages::{Dashboard, Home, Login, NotFound, Register};
use crate::frontend::services::context::AuthState;
use crate::utils::AppConfig;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Makes the loaded config available to the root component. Only the first
/// call has an effect.
pub fn install_config(config: AppConfig) {
    if CONFIG.set(config).is_err() {
        log::warn!("Config already installed, ignoring");
    }
}

/// Main routing enum for the application.
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        /// Landing page.
        #[route("/")]
        Home {},
        /// Sign-in form.
        #[route("/login")]
        Login {},
        /// Sign-up form.
        #[route("/register")]
        Register {},
        /// Signed-in area; redirects to `/login` otherwise.
        #[route("/dashboard")]
        Dashboard {},
    #[end_layout]
    /// Anything else.
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let is_authenticated = use_signal(|| false);
    let current_user = use_signal(|| None::<String>);
    use_context_provider(|| AuthState {
        is_authenticated,
        current_user,
    });
    let config = use_context_provider(|| CONFIG.get().cloned().unwrap_or_default());

    rsx! {
        style {
            dangerous_inner_html: ResourceLoader::get_css(config.ui.compact_breakpoint)
        }
        Router::<Route> {}
    }
}
