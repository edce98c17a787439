//! Session and header state
//!
//! The header/navigation component is a pure function of an explicit
//! [`AuthState`] value instead of reading a process-wide session store, and
//! logout hands the parent controller an explicit reset signal instead of
//! forcing a full view reload.

use serde::{Deserialize, Serialize};

/// Who is signed in, passed into session-dependent views as configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    /// Signed-in username, `None` for anonymous visitors
    pub username: Option<String>,
}

impl AuthState {
    pub fn anonymous() -> Self {
        Self { username: None }
    }

    pub fn signed_in(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.username.is_some()
    }
}

/// Affordances the header can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HeaderAction {
    BackToExplore,
    Login,
    Register,
    Logout,
}

/// Signal emitted to the parent controller when session-dependent views must
/// be reinitialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Reset,
}

/// Decides which header affordances render for the given auth state.
///
/// `hide_auth_buttons` is set by views that replace the auth controls with a
/// back-to-explore link (e.g. the login and register pages themselves).
pub fn header_actions(auth: &AuthState, hide_auth_buttons: bool) -> Vec<HeaderAction> {
    if hide_auth_buttons {
        return vec![HeaderAction::BackToExplore];
    }

    if auth.is_signed_in() {
        vec![HeaderAction::Logout]
    } else {
        vec![HeaderAction::Login, HeaderAction::Register]
    }
}

/// Signs the user out: the successor state is anonymous and the caller
/// receives the reset signal to reinitialize session-dependent views.
pub fn logout(_auth: AuthState) -> (AuthState, SessionEvent) {
    (AuthState::anonymous(), SessionEvent::Reset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_visitors_see_login_and_register() {
        assert_eq!(
            header_actions(&AuthState::anonymous(), false),
            vec![HeaderAction::Login, HeaderAction::Register]
        );
    }

    #[test]
    fn signed_in_users_see_logout() {
        assert_eq!(
            header_actions(&AuthState::signed_in("crio-user"), false),
            vec![HeaderAction::Logout]
        );
    }

    #[test]
    fn auth_pages_only_show_the_back_link() {
        let auth = AuthState::signed_in("crio-user");
        assert_eq!(header_actions(&auth, true), vec![HeaderAction::BackToExplore]);
    }

    #[test]
    fn logout_resets_to_anonymous_and_signals_the_parent() {
        let (auth, event) = logout(AuthState::signed_in("crio-user"));
        assert_eq!(auth, AuthState::anonymous());
        assert_eq!(event, SessionEvent::Reset);
    }
}
