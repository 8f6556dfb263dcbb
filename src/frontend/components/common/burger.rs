use dioxus::prelude::*;

/// Hamburger toggle shown on narrow viewports.
#[component]
pub fn Burger(open: bool, on_toggle: EventHandler) -> Element {
    rsx! {
        button {
            class: if open { "burger burger-open" } else { "burger" },
            r#type: "button",
            aria_label: "Toggle navigation",
            aria_expanded: "{open}",
            onclick: move |_| on_toggle.call(()),
            span {}
            span {}
            span {}
        }
    }
}
