//! Authentication context and state management.
//!
//! This is the application's side of the auth capability. Components below the
//! layout never look it up themselves; they receive `is_authenticated` and a
//! logout handler as props.

use dioxus::prelude::*;

const USERNAME_RULES: &str =
    "Username must be 3-16 characters long and can only contain letters, numbers, and underscores";

#[derive(Clone, Copy)]
pub struct AuthState {
    pub is_authenticated: Signal<bool>,
    pub current_user: Signal<Option<String>>,
}

impl AuthState {
    /// Validates if a username meets the requirements.
    pub fn is_valid_username(username: &str) -> bool {
        (3..=16).contains(&username.len())
            && username
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    /// Signs in with a username.
    pub fn login(&mut self, username: String) -> Result<(), String> {
        let username = username.trim().to_string();

        if !Self::is_valid_username(&username) {
            return Err(USERNAME_RULES.to_string());
        }

        log::info!("Signed in as {username}");
        self.current_user.set(Some(username));
        self.is_authenticated.set(true);

        Ok(())
    }

    /// Signs out the current user.
    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.write().take() {
            log::info!("Signed out {user}");
        }
        self.is_authenticated.set(false);
    }

    pub fn username(&self) -> Option<String> {
        self.current_user.read().clone()
    }
}
