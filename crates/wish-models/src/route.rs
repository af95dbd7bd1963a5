//! Route resolution and share-link construction.
//!
//! Routing is hash-based: the location fragment maps to one of four
//! top-level views. Resolution is a pure, total function: every input
//! string maps to exactly one route, never an error.

/// A resolved top-level route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    /// Landing view. Also the fallback for unknown or empty fragments.
    Home,
    /// Post-creation view showing the shareable link. Reached by link
    /// construction, not by a hash fragment.
    CreateLink,
    /// Recipient flow, carrying the celebrant's name when the link had one.
    Celebrate { name: Option<String> },
    /// Secondary panel of AI tools.
    Tools,
}

impl AppRoute {
    /// Resolve a location fragment to a route.
    ///
    /// `#/celebrate?name=Sam` → `Celebrate { name: Some("Sam") }`;
    /// `#/celebrate` with no name parameter still resolves, with the name
    /// absent. Anything unrecognized is Home.
    pub fn parse(hash: &str) -> Self {
        if hash.starts_with("#/celebrate") {
            let name = hash
                .split_once('?')
                .and_then(|(_, query)| query_param(query, "name"));
            AppRoute::Celebrate { name }
        } else if hash.starts_with("#/tools") {
            AppRoute::Tools
        } else {
            AppRoute::Home
        }
    }
}

/// Extract and percent-decode a query parameter.
fn query_param(query: &str, key: &str) -> Option<String> {
    for pair in query.split('&') {
        let (k, v) = match pair.split_once('=') {
            Some(kv) => kv,
            None => continue,
        };
        if k == key && !v.is_empty() {
            return Some(
                urlencoding::decode(v)
                    .map(|s| s.into_owned())
                    .unwrap_or_else(|_| v.to_string()),
            );
        }
    }
    None
}

/// Build the shareable celebrate link for a given base URL and name.
///
/// The name is percent-encoded so it survives the round trip through
/// [`AppRoute::parse`].
pub fn celebrate_link(base_url: &str, name: &str) -> String {
    format!("{}#/celebrate?name={}", base_url, urlencoding::encode(name))
}
