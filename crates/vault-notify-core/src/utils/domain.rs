//! URL to domain resolution and stored-URI matching.
//!
//! Domains are the lowercased host with a leading `www.` removed. Public
//! suffix resolution is not attempted: `accounts.example.co.uk` stays as is,
//! and the `Domain` strategy treats a host and its subdomains as equivalent.

use regex::Regex;
use url::Url;

use crate::domain::{LoginUri, UriMatchStrategy};
use crate::ports::DomainMatchPolicy;

/// Resolve the domain of a page URL.
///
/// Accepts full URLs and bare hosts (`example.com/login`). Returns `None` for
/// empty input or anything without a host.
pub fn domain_of(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let parsed = Url::parse(trimmed)
        .ok()
        .filter(|url| url.has_host())
        .or_else(|| Url::parse(&format!("http://{trimmed}")).ok())?;

    let host = parsed.host_str()?.to_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);
    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}

/// Display name for a login created from a notification.
///
/// Uses the URI's hostname without a leading `www.`, falling back to the
/// queued domain when the URI has no parseable hostname.
pub fn item_name_for(uri: &str, fallback_domain: &str) -> String {
    Url::parse(uri.trim())
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .map(|host| host.strip_prefix("www.").unwrap_or(&host).to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| fallback_domain.to_string())
}

fn host_with_port(raw: &str) -> Option<String> {
    let url = Url::parse(raw.trim()).ok()?;
    let host = url.host_str()?.to_lowercase();
    Some(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host,
    })
}

/// Default [`DomainMatchPolicy`] implementing the standard URI strategies.
#[derive(Debug, Clone, Copy, Default)]
pub struct UriMatcher {
    default_strategy: UriMatchStrategy,
}

impl UriMatcher {
    /// Create a matcher; `default_strategy` applies to URIs without an override.
    pub const fn new(default_strategy: UriMatchStrategy) -> Self {
        Self { default_strategy }
    }
}

impl DomainMatchPolicy for UriMatcher {
    fn matches(&self, login_uri: &LoginUri, page_url: &str) -> bool {
        let strategy = login_uri.match_strategy.unwrap_or(self.default_strategy);
        match strategy {
            UriMatchStrategy::Never => false,
            UriMatchStrategy::Domain => {
                match (domain_of(&login_uri.uri), domain_of(page_url)) {
                    (Some(stored), Some(page)) => {
                        stored == page
                            || page.ends_with(&format!(".{stored}"))
                            || stored.ends_with(&format!(".{page}"))
                    }
                    _ => false,
                }
            }
            UriMatchStrategy::Host => {
                match (host_with_port(&login_uri.uri), host_with_port(page_url)) {
                    (Some(stored), Some(page)) => stored == page,
                    _ => false,
                }
            }
            UriMatchStrategy::StartsWith => page_url.starts_with(&login_uri.uri),
            UriMatchStrategy::Exact => page_url == login_uri.uri,
            UriMatchStrategy::RegularExpression => match Regex::new(&login_uri.uri) {
                Ok(pattern) => pattern.is_match(page_url),
                Err(e) => {
                    tracing::warn!(uri = %login_uri.uri, error = %e, "Invalid URI match pattern");
                    false
                }
            },
        }
    }
}
