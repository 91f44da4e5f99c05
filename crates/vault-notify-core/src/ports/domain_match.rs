//! Stored-URI matching policy.

use crate::domain::{LoginCipher, LoginUri};

/// Decides whether a stored URI belongs to the submitting page.
///
/// Implementations must honour [`UriMatchStrategy::Never`](crate::domain::UriMatchStrategy::Never)
/// by never matching. The default implementation is
/// [`UriMatcher`](crate::utils::domain::UriMatcher).
pub trait DomainMatchPolicy: Send + Sync {
    fn matches(&self, login_uri: &LoginUri, page_url: &str) -> bool;

    /// Whether any of the login's URIs match the page.
    fn matches_cipher(&self, cipher: &LoginCipher, page_url: &str) -> bool {
        cipher.uris.iter().any(|uri| self.matches(uri, page_url))
    }
}
