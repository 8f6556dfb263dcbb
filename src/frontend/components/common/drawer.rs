//! Off-canvas drawer. Renders nothing while closed.

use dioxus::prelude::*;

#[component]
pub fn Drawer(
    open: bool,
    on_close: EventHandler,
    #[props(default = "right")] position: &'static str,
    #[props(default = "xs")] size: &'static str,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "drawer-overlay",
            onclick: move |_| on_close.call(()),
        }
        aside {
            class: "drawer drawer-{position} drawer-{size}",
            role: "dialog",
            aria_modal: "true",
            tabindex: "-1",
            // Focused on mount so Escape reaches the handler below
            onmounted: move |element: MountedEvent| {
                spawn(async move {
                    let _ = element.set_focus(true).await;
                });
            },
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Escape {
                    on_close.call(());
                }
            },

            div { class: "drawer-header",
                button {
                    class: "drawer-close",
                    r#type: "button",
                    aria_label: "Close navigation",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
            }

            div { class: "drawer-body", {children} }
        }
    }
}
