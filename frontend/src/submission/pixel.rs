use serde::Serialize;
use wasm_bindgen::prelude::*;

use forms::{SubmissionRequest, TrackError, Tracker};

#[wasm_bindgen]
extern "C" {
    // the pixel snippet in index.html defines `fbq` on window; ad blockers remove it
    #[wasm_bindgen(catch, js_name = fbq)]
    fn fbq(action: &str, event: &str, params: JsValue) -> Result<(), JsValue>;
}

#[derive(Serialize)]
struct LeadParams<'a> {
    content_name: &'a str,
    content_category: &'a str,
}

/// Reports a `Lead` event to the Meta Pixel.
pub struct MetaPixel;

impl Tracker for MetaPixel {
    fn track(&self, request: &SubmissionRequest) -> Result<(), TrackError> {
        let params = LeadParams {
            content_name: request.form_id(),
            content_category: request
                .get_str("category")
                .or_else(|| request.get_str("budget"))
                .filter(|value| !value.is_empty())
                .unwrap_or("lead"),
        };
        let params = serde_wasm_bindgen::to_value(&params)
            .map_err(|e| TrackError::Rejected(e.to_string()))?;
        fbq("track", "Lead", params).map_err(|e| TrackError::Unavailable(format!("{:?}", e)))
    }
}
