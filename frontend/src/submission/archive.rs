use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;

use forms::document::{collection_url, firestore_document};
use forms::{SubmissionRequest, TrackError, Tracker};

use crate::config;

/// Copies each accepted lead into a Firestore collection. The write runs in
/// the background and its outcome is only logged.
pub struct LeadArchive {
    url: String,
}

impl LeadArchive {
    pub fn from_config() -> Option<Self> {
        let firestore = config::firestore()?;
        Some(Self {
            url: collection_url(firestore.project_id, firestore.collection, firestore.api_key),
        })
    }
}

impl Tracker for LeadArchive {
    fn track(&self, request: &SubmissionRequest) -> Result<(), TrackError> {
        let document = firestore_document(request);
        let write = Request::post(&self.url)
            .json(&document)
            .map_err(|e| TrackError::Rejected(e.to_string()))?;

        spawn_local(async move {
            match write.send().await {
                Ok(response) if response.ok() => log::info!("Lead archived"),
                Ok(response) => log::warn!("Lead archive answered {}", response.status()),
                Err(e) => log::warn!("Lead archive unreachable: {}", e),
            }
        });
        Ok(())
    }
}
