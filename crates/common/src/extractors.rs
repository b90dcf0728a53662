//! Custom axum extractors for Carepath

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::{Error, FieldError};

const DATA_ERROR_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

/// JSON extractor that validates the deserialized value automatically.
///
/// Replaces `Json<T>` + manual `.validate()` calls in handlers, so a body
/// that fails its rules never reaches a repository.
/// Requires `T: DeserializeOwned + Validate`.
///
/// All input errors (deserialization + validation) return 400. A body that
/// parses as JSON but has the wrong shape is reported per field like any
/// other validation failure.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

/// Rejection type for `ValidatedJson`:
/// - syntax, content-type and body read errors → 400 `{"error": "<reason>"}`
/// - wrong-shaped JSON and rule violations → 400
///   `{"error": "Validation failed", "details": [...]}`
#[derive(Debug)]
pub enum ValidatedJsonRejection {
    Json(JsonRejection),
    Validation(Error),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            ValidatedJsonRejection::Json(JsonRejection::JsonDataError(e)) => {
                let text = e.body_text();
                tracing::debug!(error = %text, "Request body has the wrong shape");
                Error::Validation(vec![data_error_detail(&text)]).into_response()
            }
            ValidatedJsonRejection::Json(e) => {
                tracing::debug!(error = %e, "Rejected request body");
                Error::BadRequest(e.body_text()).into_response()
            }
            ValidatedJsonRejection::Validation(e) => e.into_response(),
        }
    }
}

/// Turn a deserialization failure such as
/// ``"<prefix>plan: unknown variant `gold`, expected ... at line 1 column 14"``
/// into a field error without serde's wording or positions
fn data_error_detail(text: &str) -> FieldError {
    let detail = text.strip_prefix(DATA_ERROR_PREFIX).unwrap_or(text);
    let detail = match detail.rfind(" at line ") {
        Some(idx) => &detail[..idx],
        None => detail,
    };

    if let Some(rest) = detail.strip_prefix("missing field `") {
        if let Some(end) = rest.find('`') {
            return FieldError::new(&rest[..end], "is required");
        }
    }

    let (field, reason) = match detail.split_once(": ") {
        Some((path, reason)) if !path.is_empty() && !path.contains(char::is_whitespace) => {
            (path, reason)
        }
        _ => ("body", detail),
    };

    let message = if reason.starts_with("invalid type") {
        "has the wrong type"
    } else if reason.starts_with("unknown variant") || reason.starts_with("invalid value") {
        "is not an allowed value"
    } else if let Some(rest) = reason.strip_prefix("missing field `") {
        let nested = rest.split('`').next().unwrap_or_default();
        return FieldError::new(format!("{field}.{nested}"), "is required");
    } else {
        "is invalid"
    };

    FieldError::new(field, message)
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::Json)?;
        value
            .validate()
            .map_err(|e| ValidatedJsonRejection::Validation(Error::from(e)))?;
        Ok(ValidatedJson(value))
    }
}
