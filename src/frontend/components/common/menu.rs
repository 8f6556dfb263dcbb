//! Dropdown menu anchored to a trigger.
//!
//! The menu does not own its open flag. Clicking the trigger asks the owner to
//! toggle; clicking outside or pressing Escape asks it to dismiss.

use dioxus::prelude::*;

#[component]
pub fn DropdownMenu(
    open: bool,
    on_toggle: EventHandler,
    on_dismiss: EventHandler,
    trigger: Element,
    #[props(default = 150)] width: u32,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "menu",
            onkeydown: move |e: KeyboardEvent| {
                if open && e.key() == Key::Escape {
                    on_dismiss.call(());
                }
            },

            button {
                class: "menu-target unstyled-button",
                r#type: "button",
                aria_haspopup: "menu",
                aria_expanded: "{open}",
                onclick: move |_| on_toggle.call(()),
                {trigger}
            }

            if open {
                div {
                    class: "menu-backdrop",
                    onclick: move |_| on_dismiss.call(()),
                }
                div {
                    class: "menu-dropdown menu-bottom-end",
                    role: "menu",
                    style: "width: {width}px;",
                    {children}
                }
            }
        }
    }
}
