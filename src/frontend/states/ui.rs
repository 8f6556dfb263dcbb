//! Local header state: the avatar menu and the mobile drawer.
//!
//! Two independent flags. Neither is derived from the session; the only
//! coupling is that picking something in the drawer, or logging out from
//! anywhere, closes the drawer.

use crate::frontend::services::navigation::NavAction;

/// Where a header control is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Compact layout, plain buttons.
    Inline,
    /// Compact layout, inside the avatar dropdown.
    Menu,
    /// Mobile drawer.
    Drawer,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    menu_open: bool,
    drawer_open: bool,
}

impl UiState {
    pub const fn menu_open(self) -> bool {
        self.menu_open
    }

    pub const fn drawer_open(self) -> bool {
        self.drawer_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    pub fn toggle_drawer(&mut self) {
        if self.drawer_open {
            self.close_drawer();
        } else {
            self.open_drawer();
        }
    }

    /// Applies the local effect of activating `action` from `placement` and
    /// returns the action so the caller can dispatch it afterwards.
    pub fn select(&mut self, placement: Placement, action: NavAction) -> NavAction {
        match placement {
            Placement::Inline => {}
            Placement::Menu => self.close_menu(),
            Placement::Drawer => self.close_drawer(),
        }
        // The drawer may be open but hidden by a wide viewport
        if action == NavAction::Logout {
            self.close_drawer();
        }
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::services::navigation::Destination;

    const ALL_ACTIONS: [NavAction; 4] = [
        NavAction::Navigate(Destination::Dashboard),
        NavAction::Navigate(Destination::Login),
        NavAction::Navigate(Destination::Register),
        NavAction::Logout,
    ];

    #[test]
    fn starts_closed() {
        let state = UiState::default();
        assert!(!state.menu_open());
        assert!(!state.drawer_open());
    }

    #[test]
    fn drawer_toggle_alternates() {
        let mut state = UiState::default();
        let mut seen = Vec::new();
        for _ in 0..4 {
            state.toggle_drawer();
            seen.push(state.drawer_open());
        }
        assert_eq!(seen, [true, false, true, false]);
    }

    #[test]
    fn flags_are_independent() {
        let mut state = UiState::default();

        state.toggle_menu();
        assert!(state.menu_open());
        assert!(!state.drawer_open());

        state.open_drawer();
        state.close_menu();
        assert!(!state.menu_open());
        assert!(state.drawer_open());

        state.close_drawer();
        assert_eq!(state, UiState::default());
    }

    #[test]
    fn drawer_selection_always_closes_drawer() {
        for action in ALL_ACTIONS {
            for start_open in [false, true] {
                let mut state = UiState::default();
                if start_open {
                    state.open_drawer();
                }

                let returned = state.select(Placement::Drawer, action);

                assert_eq!(returned, action);
                assert!(!state.drawer_open(), "{action:?} from open={start_open}");
            }
        }
    }

    #[test]
    fn menu_navigation_closes_menu_but_not_drawer() {
        let mut state = UiState::default();
        state.toggle_menu();
        state.open_drawer();

        state.select(Placement::Menu, NavAction::Navigate(Destination::Dashboard));

        assert!(!state.menu_open());
        assert!(state.drawer_open());
    }

    #[test]
    fn logout_closes_drawer_from_every_placement() {
        for placement in [Placement::Inline, Placement::Menu, Placement::Drawer] {
            let mut state = UiState::default();
            state.toggle_menu();
            state.open_drawer();

            state.select(placement, NavAction::Logout);

            assert!(!state.drawer_open(), "{placement:?}");
            assert_eq!(state.menu_open(), placement != Placement::Menu, "{placement:?}");
        }
    }

    #[test]
    fn inline_selection_leaves_state_alone() {
        let mut state = UiState::default();
        state.open_drawer();
        let before = state;

        state.select(Placement::Inline, NavAction::Navigate(Destination::Login));

        assert_eq!(state, before);
    }
}
