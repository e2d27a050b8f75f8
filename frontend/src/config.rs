use std::time::Duration;

use forms::config::{resolve_base_url, DEFAULT_TIMEOUT};

/// Backend base URL. `FORMS_API_URL` at build time overrides; otherwise a
/// local hostname means the dev server and anything else the same origin.
pub fn get_backend_url() -> String {
    let hostname = web_sys::window()
        .and_then(|window| window.location().hostname().ok())
        .unwrap_or_default();
    resolve_base_url(option_env!("FORMS_API_URL"), &hostname)
}

/// Inbox the form relay forwards demo requests to, when the relay is used.
pub fn relay_inbox() -> Option<&'static str> {
    option_env!("FORMS_RELAY_INBOX").filter(|inbox| !inbox.trim().is_empty())
}

pub fn request_timeout() -> Duration {
    option_env!("FORMS_TIMEOUT_SECS")
        .and_then(|secs| secs.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TIMEOUT)
}

pub struct FirestoreConfig {
    pub project_id: &'static str,
    pub api_key: &'static str,
    pub collection: &'static str,
}

/// Lead archive settings; `None` disables the archive.
pub fn firestore() -> Option<FirestoreConfig> {
    Some(FirestoreConfig {
        project_id: option_env!("FIRESTORE_PROJECT_ID")?,
        api_key: option_env!("FIRESTORE_API_KEY")?,
        collection: option_env!("FIRESTORE_COLLECTION").unwrap_or("leads"),
    })
}
