/// Sign-in state of the current user
///
/// There is no credential check: any non-blank display name signs in.
use crate::error::SessionError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    SignedOut,
    SignedIn { username: String },
}

impl Session {
    /// Sign in as `username`, replacing any current user.
    /// The name is stored exactly as given; only `""` is refused.
    pub fn login(&mut self, username: &str) -> Result<(), SessionError> {
        if username.is_empty() {
            return Err(SessionError::EmptyUsername);
        }

        *self = Session::SignedIn {
            username: username.to_string(),
        };
        Ok(())
    }

    /// Sign out. Returns `true` if someone was signed in.
    pub fn logout(&mut self) -> bool {
        let was_signed_in = self.is_signed_in();
        *self = Session::SignedOut;
        was_signed_in
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, Session::SignedIn { .. })
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Session::SignedIn { username } => Some(username),
            Session::SignedOut => None,
        }
    }
}

/// View state of the login dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub open: bool,
    pub username: String,
}

impl LoginForm {
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the dialog and drop the draft
    pub fn close(&mut self) {
        self.open = false;
        self.username.clear();
    }

    /// Whether the submit button should be enabled
    pub fn can_submit(&self) -> bool {
        !self.username.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_then_logout() {
        let mut session = Session::default();
        assert!(!session.is_signed_in());

        session.login("alice").unwrap();
        assert!(session.is_signed_in());
        assert_eq!(session.username(), Some("alice"));

        assert!(session.logout());
        assert_eq!(session, Session::SignedOut);
        assert_eq!(session.username(), None);
    }

    #[test]
    fn test_login_overwrites_username() {
        let mut session = Session::default();
        session.login("alice").unwrap();
        session.login("bob").unwrap();
        assert_eq!(session.username(), Some("bob"));
    }

    #[test]
    fn test_logout_when_signed_out_is_noop() {
        let mut session = Session::default();
        assert!(!session.logout());
        assert!(!session.logout());
        assert_eq!(session, Session::SignedOut);
    }

    #[test]
    fn test_empty_username_rejected() {
        let mut session = Session::default();
        assert_eq!(session.login(""), Err(SessionError::EmptyUsername));
        assert!(!session.is_signed_in());
    }

    #[test]
    fn test_any_nonempty_username_stored_verbatim() {
        let mut session = Session::default();
        session.login(" bob ").unwrap();
        assert_eq!(session.username(), Some(" bob "));

        session.login("  ").unwrap();
        assert_eq!(session.username(), Some("  "));
    }

    #[test]
    fn test_login_form() {
        let mut form = LoginForm::default();
        form.open();
        assert!(form.open);
        assert!(!form.can_submit());

        form.username = "dave".to_string();
        assert!(form.can_submit());

        form.close();
        assert!(!form.open);
        assert!(form.username.is_empty());
    }
}
