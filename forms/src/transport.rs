use async_trait::async_trait;
use serde_json::Value;

use crate::error::SubmitError;
use crate::payload::SubmissionRequest;

/// Delivers one submission to an external endpoint.
///
/// `?Send` because browser futures are tied to the single UI thread.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: &SubmissionRequest) -> Result<(), SubmitError>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for std::rc::Rc<T> {
    async fn send(&self, request: &SubmissionRequest) -> Result<(), SubmitError> {
        (**self).send(request).await
    }
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn send(&self, request: &SubmissionRequest) -> Result<(), SubmitError> {
        (**self).send(request).await
    }
}

/// Classifies an HTTP status and body into success or a [`SubmitError`].
///
/// Shared by every HTTP transport so browser and native builds agree.
pub fn interpret_response(status: u16, body: &str) -> Result<(), SubmitError> {
    let ok = (200..300).contains(&status);
    let body = body.trim();

    if body.is_empty() {
        return if ok {
            Ok(())
        } else {
            Err(SubmitError::Server {
                status,
                message: format!("Request failed with status {}", status),
            })
        };
    }

    let parsed: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            return Err(SubmitError::MalformedResponse {
                status,
                detail: e.to_string(),
            })
        }
    };

    if ok {
        // form relays answer 200 with `"success": "false"` when they refuse a post
        let refused = matches!(
            parsed.get("success"),
            Some(Value::Bool(false))
        ) || parsed.get("success").and_then(Value::as_str) == Some("false");
        if refused {
            return Err(SubmitError::Server {
                status,
                message: server_message(&parsed)
                    .unwrap_or_else(|| "Submission was refused".to_string()),
            });
        }
        return Ok(());
    }

    Err(SubmitError::Server {
        status,
        message: server_message(&parsed)
            .unwrap_or_else(|| format!("Request failed with status {}", status)),
    })
}

fn server_message(body: &Value) -> Option<String> {
    ["error", "message"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}
