//! Navigation destinations and the role-dependent set of header actions.

/// In-app pages the header can send the user to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Destination {
    Home,
    Dashboard,
    Login,
    Register,
}

impl Destination {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Dashboard => "/dashboard",
            Self::Login => "/login",
            Self::Register => "/register",
        }
    }
}

/// Something a header control does when activated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    Navigate(Destination),
    Logout,
}

impl NavAction {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Navigate(Destination::Home) => "Home",
            Self::Navigate(Destination::Dashboard) => "Dashboard",
            Self::Navigate(Destination::Login) => "Log in",
            Self::Navigate(Destination::Register) => "Sign up",
            Self::Logout => "Logout",
        }
    }

    /// Whether the control should be styled as destructive.
    pub const fn is_danger(self) -> bool {
        matches!(self, Self::Logout)
    }

    /// Hands the action to whichever collaborator owns it.
    ///
    /// Failures inside `navigate` or `logout` are theirs; nothing is caught here.
    pub fn dispatch(self, navigate: impl FnOnce(Destination), logout: impl FnOnce()) {
        match self {
            Self::Navigate(destination) => navigate(destination),
            Self::Logout => logout(),
        }
    }
}

/// The header's controls for the current session, chosen once per render and
/// shared by the compact and drawer layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavContent {
    Authenticated {
        dashboard: Destination,
    },
    Anonymous {
        login: Destination,
        signup: Destination,
    },
}

impl NavContent {
    pub const fn for_session(is_authenticated: bool) -> Self {
        if is_authenticated {
            Self::Authenticated {
                dashboard: Destination::Dashboard,
            }
        } else {
            Self::Anonymous {
                login: Destination::Login,
                signup: Destination::Register,
            }
        }
    }

    pub const fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Actions in display order.
    pub const fn actions(self) -> [NavAction; 2] {
        match self {
            Self::Authenticated { dashboard } => {
                [NavAction::Navigate(dashboard), NavAction::Logout]
            }
            Self::Anonymous { login, signup } => {
                [NavAction::Navigate(login), NavAction::Navigate(signup)]
            }
        }
    }
}
