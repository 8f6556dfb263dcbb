//! Logo component.

use crate::frontend::services::navigation::Destination;
use dioxus::prelude::*;

#[component]
pub fn Logo(brand: String, on_navigate: EventHandler<Destination>) -> Element {
    let home = Destination::Home;

    rsx! {
        a {
            class: "brand",
            href: home.path(),
            onclick: move |e: MouseEvent| {
                e.prevent_default();
                on_navigate.call(home);
            },
            "{brand}"
        }
    }
}
