//! Site header: branding, session-dependent controls, and the mobile drawer.
//!
//! The header never looks at how the session is established. It gets
//! `is_authenticated` and the two collaborators (navigation and logout) from
//! its parent and keeps its own menu/drawer flags in a `UiState`.

use crate::frontend::components::common::{Avatar, Burger, Drawer, DropdownMenu, Logo};
use crate::frontend::services::navigation::{Destination, NavAction, NavContent};
use crate::frontend::states::ui::{Placement, UiState};
use crate::utils::config::DEFAULT_BRAND;
use dioxus::prelude::*;

#[component]
pub fn NavigationBar(
    is_authenticated: bool,
    on_navigate: EventHandler<Destination>,
    on_logout: EventHandler,
    #[props(into, default = DEFAULT_BRAND.to_string())] brand: String,
) -> Element {
    let mut ui = use_signal(UiState::default);
    let content = NavContent::for_session(is_authenticated);
    let state = ui();

    let mut select = move |placement: Placement, action: NavAction| {
        activate(
            &mut ui.write(),
            placement,
            action,
            |destination| on_navigate.call(destination),
            || on_logout.call(()),
        );
    };
    let compact = compact_placement(content);

    rsx! {
        header { class: "header",
            div { class: "container container-lg header-inner",
                Logo { brand, on_navigate }

                CompactNav {
                    content,
                    menu_open: state.menu_open(),
                    on_toggle_menu: move |_| ui.write().toggle_menu(),
                    on_dismiss_menu: move |_| ui.write().close_menu(),
                    on_select: move |action| select(compact, action),
                }

                Burger {
                    open: state.drawer_open(),
                    on_toggle: move |_| ui.write().toggle_drawer(),
                }

                Drawer {
                    open: state.drawer_open(),
                    on_close: move |_| ui.write().close_drawer(),
                    DrawerNav {
                        content,
                        on_select: move |action| select(Placement::Drawer, action),
                    }
                }
            }
        }
    }
}

/// Wide-viewport controls: avatar menu when signed in, two buttons otherwise.
#[component]
pub fn CompactNav(
    content: NavContent,
    menu_open: bool,
    on_toggle_menu: EventHandler,
    on_dismiss_menu: EventHandler,
    on_select: EventHandler<NavAction>,
) -> Element {
    let controls = match content {
        NavContent::Authenticated { .. } => rsx! {
            DropdownMenu {
                open: menu_open,
                on_toggle: on_toggle_menu,
                on_dismiss: on_dismiss_menu,
                trigger: rsx! { Avatar { size: "sm" } },
                width: 150,
                for action in content.actions() {
                    ActionControl {
                        key: "{action.label()}",
                        action,
                        class: control_class(Placement::Menu, 0, action),
                        on_select,
                    }
                }
            }
        },
        NavContent::Anonymous { .. } => rsx! {
            for (index, action) in content.actions().into_iter().enumerate() {
                ActionControl {
                    key: "{action.label()}",
                    action,
                    class: control_class(Placement::Inline, index, action),
                    on_select,
                }
            }
        },
    };

    rsx! {
        div { class: "group nav-links", {controls} }
    }
}

/// Narrow-viewport controls, stacked inside the drawer.
#[component]
pub fn DrawerNav(content: NavContent, on_select: EventHandler<NavAction>) -> Element {
    rsx! {
        div { class: "stack",
            for action in content.actions() {
                ActionControl {
                    key: "{action.label()}",
                    action,
                    class: control_class(Placement::Drawer, 0, action),
                    on_select,
                }
            }
        }
    }
}

/// Runs one header control: local effect on `ui` first, then the collaborator.
pub(crate) fn activate(
    ui: &mut UiState,
    placement: Placement,
    action: NavAction,
    navigate: impl FnOnce(Destination),
    logout: impl FnOnce(),
) {
    let action = ui.select(placement, action);
    log::debug!("Header action {action:?} from {placement:?}");
    action.dispatch(navigate, logout);
}

/// Where the wide-viewport controls live for `content`.
fn compact_placement(content: NavContent) -> Placement {
    if content.is_authenticated() {
        Placement::Menu
    } else {
        Placement::Inline
    }
}

fn control_class(placement: Placement, index: usize, action: NavAction) -> &'static str {
    match (placement, action.is_danger()) {
        (Placement::Menu, true) => "menu-item menu-item-danger",
        (Placement::Menu, false) => "menu-item",
        (Placement::Drawer, true) => "button button-light button-danger",
        (Placement::Drawer, false) => "button button-light",
        // First inline button is the quiet one.
        (Placement::Inline, _) if index == 0 => "button button-sm button-default",
        (Placement::Inline, _) => "button button-sm button-filled",
    }
}

/// One header control. Navigation renders as a link so the destination is
/// visible; logout is a plain button.
#[component]
fn ActionControl(
    action: NavAction,
    class: &'static str,
    on_select: EventHandler<NavAction>,
) -> Element {
    let label = action.label();

    match action {
        NavAction::Navigate(destination) => rsx! {
            a {
                class: "{class}",
                href: destination.path(),
                onclick: move |e: MouseEvent| {
                    e.prevent_default();
                    on_select.call(action);
                },
                "{label}"
            }
        },
        NavAction::Logout => rsx! {
            button {
                class: "{class}",
                r#type: "button",
                onclick: move |_| on_select.call(action),
                "{label}"
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Calls observed by the collaborators handed to `activate`.
    #[derive(Debug, Default, PartialEq)]
    struct Calls {
        navigated: Vec<Destination>,
        logouts: usize,
    }

    fn run(ui: &mut UiState, placement: Placement, action: NavAction) -> Calls {
        let navigated = RefCell::new(Vec::new());
        let logouts = Cell::new(0);
        activate(
            ui,
            placement,
            action,
            |destination| navigated.borrow_mut().push(destination),
            || logouts.set(logouts.get() + 1),
        );
        Calls {
            navigated: navigated.into_inner(),
            logouts: logouts.get(),
        }
    }

    fn open_everything() -> UiState {
        let mut ui = UiState::default();
        ui.toggle_menu();
        ui.open_drawer();
        ui
    }

    #[test]
    fn signed_in_compact_controls_live_in_the_menu() {
        assert_eq!(compact_placement(NavContent::for_session(true)), Placement::Menu);
        assert_eq!(compact_placement(NavContent::for_session(false)), Placement::Inline);
    }

    #[test]
    fn logout_from_avatar_menu_closes_menu_and_drawer() {
        let mut ui = open_everything();
        let placement = compact_placement(NavContent::for_session(true));

        let calls = run(&mut ui, placement, NavAction::Logout);

        assert_eq!(calls.logouts, 1);
        assert!(calls.navigated.is_empty());
        assert!(!ui.menu_open());
        assert!(!ui.drawer_open());
    }

    #[test]
    fn dashboard_from_avatar_menu_leaves_drawer_alone() {
        let mut ui = open_everything();

        let calls = run(&mut ui, Placement::Menu, NavAction::Navigate(Destination::Dashboard));

        assert_eq!(calls.navigated, [Destination::Dashboard]);
        assert_eq!(calls.logouts, 0);
        assert!(!ui.menu_open());
        assert!(ui.drawer_open());
    }

    #[test]
    fn drawer_selection_closes_drawer_then_dispatches() {
        for content in [NavContent::for_session(true), NavContent::for_session(false)] {
            for action in content.actions() {
                let mut ui = UiState::default();
                ui.open_drawer();

                let calls = run(&mut ui, Placement::Drawer, action);

                assert!(!ui.drawer_open(), "{action:?}");
                let expected_logouts = usize::from(action == NavAction::Logout);
                assert_eq!(calls.logouts, expected_logouts, "{action:?}");
                assert_eq!(calls.navigated.len(), 1 - expected_logouts, "{action:?}");
            }
        }
    }

    #[test]
    fn inline_signup_navigates_to_register() {
        let mut ui = UiState::default();
        let placement = compact_placement(NavContent::for_session(false));

        let calls = run(&mut ui, placement, NavAction::Navigate(Destination::Register));

        assert_eq!(calls.navigated, [Destination::Register]);
        assert_eq!(ui, UiState::default());
    }

    #[derive(Clone, PartialEq)]
    struct Fixture {
        authenticated: bool,
        open: bool,
    }

    fn render(root: fn(Fixture) -> Element, authenticated: bool, open: bool) -> String {
        let mut dom = VirtualDom::new_with_props(root, Fixture { authenticated, open });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn navigation_bar(fixture: Fixture) -> Element {
        rsx! {
            NavigationBar {
                is_authenticated: fixture.authenticated,
                on_navigate: move |_| {},
                on_logout: move |_| {},
            }
        }
    }

    fn compact(fixture: Fixture) -> Element {
        rsx! {
            CompactNav {
                content: NavContent::for_session(fixture.authenticated),
                menu_open: fixture.open,
                on_toggle_menu: move |_| {},
                on_dismiss_menu: move |_| {},
                on_select: move |_| {},
            }
        }
    }

    fn mobile(fixture: Fixture) -> Element {
        rsx! {
            Drawer {
                open: fixture.open,
                on_close: move |_| {},
                DrawerNav {
                    content: NavContent::for_session(fixture.authenticated),
                    on_select: move |_| {},
                }
            }
        }
    }

    fn assert_signed_in_controls(html: &str) {
        assert!(html.contains("Dashboard"), "{html}");
        assert!(html.contains("Logout"), "{html}");
        assert!(html.contains(r#"href="/dashboard""#), "{html}");
        assert!(!html.contains("Log in"), "{html}");
        assert!(!html.contains("Sign up"), "{html}");
    }

    fn assert_signed_out_controls(html: &str) {
        assert!(html.contains("Log in"), "{html}");
        assert!(html.contains("Sign up"), "{html}");
        assert!(html.contains(r#"href="/login""#), "{html}");
        assert!(html.contains(r#"href="/register""#), "{html}");
        assert!(!html.contains("Dashboard"), "{html}");
        assert!(!html.contains("Logout"), "{html}");
    }

    #[test]
    fn header_shows_brand_and_closed_burger() {
        let html = render(navigation_bar, false, false);

        assert!(html.contains("QRCodeGenerator"));
        assert!(html.contains(r#"href="/""#));
        assert!(html.contains(r#"class="burger""#));
        assert!(!html.contains("drawer-overlay"));
    }

    #[test]
    fn signed_out_header_has_inline_buttons_and_no_avatar() {
        let html = render(navigation_bar, false, false);

        assert_signed_out_controls(&html);
        assert!(!html.contains("avatar"));
        assert!(!html.contains("menu-target"));
    }

    #[test]
    fn signed_in_header_starts_with_closed_avatar_menu() {
        let html = render(navigation_bar, true, false);

        assert!(html.contains("User avatar"));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(!html.contains("menu-dropdown"));
        assert!(!html.contains("Log in"));
        assert!(!html.contains("Sign up"));
    }

    #[test]
    fn compact_layout_follows_session() {
        assert_signed_in_controls(&render(compact, true, true));
        assert_signed_out_controls(&render(compact, false, false));
        assert_signed_out_controls(&render(compact, false, true));
    }

    #[test]
    fn open_avatar_menu_lists_dashboard_then_logout() {
        let html = render(compact, true, true);

        assert!(html.contains("menu-dropdown menu-bottom-end"));
        assert!(html.contains("width: 150px;"));
        assert!(html.contains("menu-item menu-item-danger"));
        let dashboard = html.find("Dashboard").unwrap();
        let logout = html.find("Logout").unwrap();
        assert!(dashboard < logout);
    }

    #[test]
    fn mobile_layout_follows_session() {
        assert_signed_in_controls(&render(mobile, true, true));
        assert_signed_out_controls(&render(mobile, false, true));
    }

    #[test]
    fn mobile_logout_is_a_button_styled_as_danger() {
        let html = render(mobile, true, true);
        assert!(html.contains(r#"class="button button-light button-danger""#));
        assert!(html.contains(r#"type="button""#));
    }

    #[test]
    fn closed_drawer_renders_nothing() {
        let html = render(mobile, true, false);
        assert!(!html.contains("Dashboard"));
        assert!(!html.contains("drawer"));
    }
}
