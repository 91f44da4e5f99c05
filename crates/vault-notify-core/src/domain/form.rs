//! Captured form submissions, tab identity and vault lock state.

use serde::{Deserialize, Serialize};

use crate::utils::domain::domain_of;

/// Browser tab identifier.
pub type TabId = i64;

/// The browser tab a message came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabRef {
    /// Tab identifier assigned by the browser.
    pub id: TabId,
    /// URL currently loaded in the tab.
    #[serde(default)]
    pub url: String,
}

impl TabRef {
    /// Create a tab reference.
    pub fn new(id: TabId, url: impl Into<String>) -> Self {
        Self { id, url: url.into() }
    }

    /// Domain of the page currently loaded in the tab.
    pub fn domain(&self) -> Option<String> {
        domain_of(&self.url)
    }
}

/// Login form values captured when a page submits a form.
///
/// Empty strings mean "field not present or not filled".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormSubmission {
    pub username: String,
    pub password: String,
    pub new_password: String,
    pub page_url: String,
}

impl FormSubmission {
    /// Create an empty submission for a page.
    pub fn new(page_url: impl Into<String>) -> Self {
        Self {
            page_url: page_url.into(),
            ..Self::default()
        }
    }

    /// Set the username field.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Set the current password field.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Set the new password field.
    #[must_use]
    pub fn with_new_password(mut self, new_password: impl Into<String>) -> Self {
        self.new_password = new_password.into();
        self
    }

    pub fn has_username(&self) -> bool {
        !self.username.is_empty()
    }

    pub fn has_password(&self) -> bool {
        !self.password.is_empty()
    }

    pub fn has_new_password(&self) -> bool {
        !self.new_password.is_empty()
    }

    /// Whether either password-bearing field is filled.
    pub fn has_password_field(&self) -> bool {
        self.has_password() || self.has_new_password()
    }

    /// Whether none of the three fields carry a value.
    pub fn is_blank(&self) -> bool {
        !self.has_username() && !self.has_password_field()
    }

    /// The password the stored login should end up with.
    ///
    /// `new_password` wins when present, otherwise the submitted `password`.
    pub fn target_password(&self) -> &str {
        if self.has_new_password() {
            &self.new_password
        } else {
            &self.password
        }
    }

    /// Domain of the submitting page, if the URL is resolvable.
    pub fn domain(&self) -> Option<String> {
        domain_of(&self.page_url)
    }
}

/// Authentication status of the active account.
///
/// Owned by the authentication subsystem; the engine only reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VaultLockState {
    #[default]
    LoggedOut,
    Locked,
    Unlocked,
}

impl VaultLockState {
    pub const fn is_unlocked(self) -> bool {
        matches!(self, Self::Unlocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_password_prefers_new_password() {
        let form = FormSubmission::new("https://example.com")
            .with_password("old")
            .with_new_password("new");
        assert_eq!(form.target_password(), "new");

        let form = FormSubmission::new("https://example.com").with_password("old");
        assert_eq!(form.target_password(), "old");
    }

    #[test]
    fn test_blank_submission() {
        assert!(FormSubmission::new("https://example.com").is_blank());
        assert!(
            !FormSubmission::new("https://example.com")
                .with_username("user")
                .is_blank()
        );
    }

    #[test]
    fn test_form_deserializes_camel_case_with_missing_fields() {
        let form: FormSubmission =
            serde_json::from_str(r#"{"newPassword":"n","pageUrl":"https://a.com"}"#).unwrap();
        assert_eq!(form.new_password, "n");
        assert_eq!(form.username, "");
        assert_eq!(form.domain().as_deref(), Some("a.com"));
    }

    #[test]
    fn test_lock_state_default_is_logged_out() {
        assert_eq!(VaultLockState::default(), VaultLockState::LoggedOut);
        assert!(VaultLockState::Unlocked.is_unlocked());
    }
}
