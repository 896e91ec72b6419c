//! The `{status, message, data}` envelope every route answers with.

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lyricfind_core::{Error, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

const BAD_REQUEST: &str =
    "Bad request, please check your datatypes or make sure to fill all parameter";

/// JSON envelope. `data` is an entity, a list of entities, or `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResponse {
    pub status: u16,
    pub message: String,
    pub data: Value,
}

impl ModelResponse {
    pub fn ok(data: Value) -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            message: "OK".to_string(),
            data,
        }
    }

    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            data: Value::Null,
        }
    }

    /// A required parameter is missing or blank.
    pub fn bad_request() -> Self {
        Self::error(StatusCode::BAD_REQUEST, BAD_REQUEST)
    }

    /// The query string could not be decoded.
    pub fn malformed(rejection: &QueryRejection) -> Self {
        Self::error(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
    }

    fn internal(err: &Error) -> Self {
        error!("Unhandled failure: {err}");
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Something went wrong!! {err}"),
        )
    }

    pub fn from_error(err: &Error) -> Self {
        match err {
            Error::Provider(provider) if provider.is_embedded_miss() => {
                let message = match &provider.description {
                    Some(description) => {
                        format!("Not found (provider code {}: {description})", provider.status)
                    }
                    None => format!("Not found (provider code {})", provider.status),
                };
                Self::error(StatusCode::NOT_FOUND, message)
            }
            Error::Provider(provider) => match StatusCode::from_u16(provider.status) {
                Ok(status) if status.is_client_error() || status.is_server_error() => {
                    Self::error(status, provider.reason.clone())
                }
                _ => Self::internal(err),
            },
            Error::Validation(ValidationError::NoTranslations) => {
                Self::error(StatusCode::NOT_FOUND, err.to_string())
            }
            Error::Validation(ValidationError::UnsupportedLanguage { .. }) => {
                Self::error(StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            _ => Self::internal(err),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK.as_u16()
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ModelResponse {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyricfind_core::ProviderError;
    use serde_json::json;

    #[test]
    fn test_provider_statuses_pass_through() {
        let response = ModelResponse::from_error(&ProviderError::not_found().into());
        assert_eq!(response.status, 404);
        assert_eq!(response.message, "Not found");
        assert_eq!(response.data, Value::Null);

        let response = ModelResponse::from_error(&ProviderError::from_status(429).into());
        assert_eq!(response.status_code(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.message, "Too many requests");
    }

    #[test]
    fn test_redirect_is_internal_error() {
        let response = ModelResponse::from_error(&ProviderError::from_status(302).into());
        assert_eq!(response.status, 500);
        assert!(response.message.starts_with("Something went wrong!! "));
        assert!(response.message.contains("captcha"));
    }

    #[test]
    fn test_embedded_code_is_not_found() {
        let err = ProviderError::embedded(206).with_description("NOT FOUND");
        let response = ModelResponse::from_error(&err.into());
        assert_eq!(response.status, 404);
        assert_eq!(response.message, "Not found (provider code 206: NOT FOUND)");

        let response = ModelResponse::from_error(&ProviderError::embedded(403).into());
        assert_eq!(response.status, 403);
        assert_eq!(response.message, "Forbidden, or invalid");
    }

    #[test]
    fn test_validation_statuses() {
        let response = ModelResponse::from_error(&ValidationError::NoTranslations.into());
        assert_eq!(response.status, 404);

        let err = ValidationError::UnsupportedLanguage {
            requested: "fr".into(),
            allowed: vec!["de".into(), "en".into()],
        };
        let response = ModelResponse::from_error(&err.into());
        assert_eq!(response.status, 422);
        assert!(response.message.contains("fr"));
    }

    #[test]
    fn test_other_errors_are_internal() {
        let response = ModelResponse::from_error(&Error::Network("connection reset".into()));
        assert_eq!(response.status, 500);
        assert_eq!(response.message, "Something went wrong!! Network error: connection reset");
    }

    #[test]
    fn test_envelope_shape() {
        let response = ModelResponse::ok(json!([{"lfid": "1"}]));
        assert!(response.is_ok());
        assert_eq!(
            serde_json::to_value(&response).unwrap_or_default(),
            json!({"status": 200, "message": "OK", "data": [{"lfid": "1"}]})
        );
    }
}
