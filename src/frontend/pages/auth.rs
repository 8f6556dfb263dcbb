//! Sign-in and sign-up pages.
//!
//! Both share one form. Real credential handling belongs to the auth
//! capability; the form only collects a user name and reports validation
//! failures.

use crate::frontend::services::context::AuthState;
use crate::frontend::services::navigation::Destination;
use dioxus::{events::KeyboardEvent, prelude::*};
use dioxus_router::navigator;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    const fn title(self) -> &'static str {
        match self {
            Self::Login => "Welcome back",
            Self::Register => "Create your account",
        }
    }

    const fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Log in",
            Self::Register => "Sign up",
        }
    }
}

#[component]
pub fn Login() -> Element {
    rsx! { AuthForm { mode: AuthMode::Login } }
}

#[component]
pub fn Register() -> Element {
    rsx! { AuthForm { mode: AuthMode::Register } }
}

#[component]
fn AuthForm(mode: AuthMode) -> Element {
    let nav = navigator();
    let auth = use_context::<AuthState>();
    let mut username = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    // Already signed in: nothing to do here
    use_effect(move || {
        if (auth.is_authenticated)() {
            nav.replace(Destination::Dashboard.path());
        }
    });

    let mut submit = move || {
        let mut auth = auth;
        match auth.login(username()) {
            Ok(()) => {
                error.set(None);
                nav.push(Destination::Dashboard.path());
            }
            Err(message) => {
                log::debug!("Rejected sign-in: {message}");
                error.set(Some(message));
            }
        }
    };

    let title = mode.title();
    let submit_label = mode.submit_label();
    let error_text = error().unwrap_or_default();

    rsx! {
        div { class: "paper paper-bordered form",
            h2 { class: "title", "{title}" }

            div { class: "stack",
                input {
                    class: "input",
                    r#type: "text",
                    value: "{username()}",
                    maxlength: "16",
                    placeholder: "Enter username...",
                    autofocus: true,
                    oninput: move |e| {
                        username.set(e.value());
                        error.set(None);
                    },
                    onkeydown: move |e: KeyboardEvent| {
                        if e.key() == Key::Enter {
                            submit();
                        }
                    },
                }

                div { class: "form-error", "{error_text}" }

                button {
                    class: "button button-filled",
                    r#type: "button",
                    onclick: move |_| submit(),
                    "{submit_label}"
                }
            }
        }
    }
}
