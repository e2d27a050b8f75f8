use std::time::Duration;

pub const BOOK_DEMO_ROUTE: &str = "/api/book-demo";
pub const LOCAL_API_URL: &str = "http://localhost:5000";
/// Production serves the API from the same origin as the site.
pub const PRODUCTION_API_URL: &str = "";
pub const FORM_RELAY_URL: &str = "https://formsubmit.co/ajax";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

const LOCAL_HOSTS: [&str; 4] = ["localhost", "127.0.0.1", "0.0.0.0", "[::1]"];

pub fn is_local_host(hostname: &str) -> bool {
    LOCAL_HOSTS.contains(&hostname.trim().to_ascii_lowercase().as_str())
}

/// Picks the API base URL: a non-blank override wins, otherwise the hostname
/// decides between local development and production.
pub fn resolve_base_url(override_url: Option<&str>, hostname: &str) -> String {
    match override_url.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
        _ if is_local_host(hostname) => LOCAL_API_URL.to_string(),
        _ => PRODUCTION_API_URL.to_string(),
    }
}

/// Where a transport posts to, and how long it waits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    url: String,
    timeout: Duration,
}

impl Endpoint {
    /// The site's own backend: `{base_url}/api/book-demo`.
    pub fn api(base_url: &str) -> Self {
        Self::custom(format!("{}{}", base_url.trim_end_matches('/'), BOOK_DEMO_ROUTE))
    }

    /// The third-party form relay that mails submissions to `inbox`.
    pub fn relay(inbox: &str) -> Self {
        Self::custom(format!("{}/{}", FORM_RELAY_URL, inbox.trim()))
    }

    pub fn custom(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Reads `FORMS_RELAY_INBOX`, `FORMS_API_URL` and `FORMS_TIMEOUT_SECS`.
    /// A relay inbox takes precedence over the API.
    pub fn from_env() -> Self {
        let timeout = std::env::var("FORMS_TIMEOUT_SECS")
            .ok()
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        let endpoint = match std::env::var("FORMS_RELAY_INBOX") {
            Ok(inbox) if !inbox.trim().is_empty() => Self::relay(&inbox),
            _ => {
                let override_url = std::env::var("FORMS_API_URL").ok();
                Self::api(&resolve_base_url(override_url.as_deref(), "localhost"))
            }
        };
        endpoint.with_timeout(timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins() {
        assert_eq!(
            resolve_base_url(Some("https://api.example.com/"), "localhost"),
            "https://api.example.com"
        );
        assert_eq!(resolve_base_url(Some("  "), "localhost"), LOCAL_API_URL);
    }

    #[test]
    fn hostname_picks_between_local_and_production() {
        assert_eq!(resolve_base_url(None, "localhost"), LOCAL_API_URL);
        assert_eq!(resolve_base_url(None, "127.0.0.1"), LOCAL_API_URL);
        assert_eq!(resolve_base_url(None, "www.evoclabs.com"), PRODUCTION_API_URL);
    }

    #[test]
    fn endpoints_join_routes() {
        assert_eq!(Endpoint::api("http://localhost:5000/").url(), "http://localhost:5000/api/book-demo");
        assert_eq!(Endpoint::api("").url(), "/api/book-demo");
        assert_eq!(
            Endpoint::relay("leads@example.com").url(),
            "https://formsubmit.co/ajax/leads@example.com"
        );
        let endpoint = Endpoint::api("").with_timeout(Duration::from_secs(5));
        assert_eq!(endpoint.timeout(), Duration::from_secs(5));
        assert_eq!(Endpoint::custom("/x").timeout(), DEFAULT_TIMEOUT);
    }
}
