//! Stored login records and the candidate view used by the decision engine.

use serde::{Deserialize, Serialize};

/// How a stored URI is compared against the page URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UriMatchStrategy {
    /// Same base domain (default).
    #[default]
    Domain,
    /// Same host, including port.
    Host,
    /// Page URL starts with the stored URI.
    StartsWith,
    /// Exact URL equality.
    Exact,
    /// Stored URI is a regular expression over the page URL.
    RegularExpression,
    /// Never offered for this URI.
    Never,
}

/// A URI saved on a login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUri {
    pub uri: String,
    /// Per-URI override; `None` falls back to the configured default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_strategy: Option<UriMatchStrategy>,
}

impl LoginUri {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            match_strategy: None,
        }
    }

    #[must_use]
    pub const fn with_strategy(mut self, strategy: UriMatchStrategy) -> Self {
        self.match_strategy = Some(strategy);
        self
    }
}

/// Whether the master password must be re-entered before using a login.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RepromptType {
    #[default]
    None,
    Password,
}

/// A decrypted login stored in the vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginCipher {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub uris: Vec<LoginUri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(default)]
    pub collection_ids: Vec<String>,
    #[serde(default)]
    pub reprompt: RepromptType,
}

impl LoginCipher {
    /// Create a login with the given id and name and no credentials.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            username: String::new(),
            password: String::new(),
            uris: Vec::new(),
            folder_id: None,
            organization_id: None,
            collection_ids: Vec::new(),
            reprompt: RepromptType::None,
        }
    }

    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    #[must_use]
    pub fn with_uri(mut self, uri: LoginUri) -> Self {
        self.uris.push(uri);
        self
    }

    #[must_use]
    pub fn with_organization(mut self, organization_id: impl Into<String>) -> Self {
        self.organization_id = Some(organization_id.into());
        self
    }

    #[must_use]
    pub const fn with_reprompt(mut self, reprompt: RepromptType) -> Self {
        self.reprompt = reprompt;
        self
    }

    pub const fn requires_reprompt(&self) -> bool {
        matches!(self.reprompt, RepromptType::Password)
    }

    /// The fields the decision engine compares against.
    pub fn to_candidate(&self) -> CredentialCandidate {
        CredentialCandidate {
            id: self.id.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

/// A login that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLoginCipher {
    pub name: String,
    pub username: String,
    pub password: String,
    pub uris: Vec<LoginUri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
}

/// A stored credential matched to the submitting page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialCandidate {
    pub id: String,
    pub username: String,
    pub password: String,
}

impl CredentialCandidate {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Case-insensitive username comparison.
    pub fn username_matches(&self, username: &str) -> bool {
        self.username.to_lowercase() == username.to_lowercase()
    }
}
