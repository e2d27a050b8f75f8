use crate::error::TrackError;
use crate::payload::SubmissionRequest;

/// Fire-and-forget side channel run after a confirmed successful submission,
/// e.g. an ad pixel or a lead archive.
#[cfg_attr(test, mockall::automock)]
pub trait Tracker {
    fn track(&self, request: &SubmissionRequest) -> Result<(), TrackError>;
}

/// Runs every tracker once. Errors are logged and dropped.
pub(crate) fn fire_all(trackers: &[Box<dyn Tracker>], request: &SubmissionRequest) {
    for (index, tracker) in trackers.iter().enumerate() {
        if let Err(e) = tracker.track(request) {
            tracing::warn!("tracker #{} failed for `{}`: {}", index, request.form_id(), e);
        }
    }
}
