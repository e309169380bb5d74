use actix_web::HttpResponse;
use serde::Serialize;
use serde_json::json;

use crate::services::ServiceError;

pub mod main;
pub mod quotes;

/// JSON envelope returned by every endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    pub data: serde_json::Value,
}

impl ApiResponse {
    /// Envelope for unmatched routes and the bare index page.
    pub fn default_response() -> Self {
        Self {
            success: false,
            message: "nothing to see here, go away".to_string(),
            data: json!({}),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: json!({}),
        }
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: format!("internal server error: {}", message.into()),
            data: json!({}),
        }
    }

    pub fn quote(message: impl Into<String>, text: &str) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: json!({ "quote": text }),
        }
    }
}

/// Maps query-service errors onto HTTP responses.
///
/// `debug` leaks the error detail into 500 envelopes; production responses
/// stay generic.
pub fn service_error_response(err: ServiceError, debug: bool) -> HttpResponse {
    match err {
        ServiceError::CategoryNotFound => {
            HttpResponse::BadRequest().json(ApiResponse::error("type does not exist"))
        }
        ServiceError::NoActiveQuote => HttpResponse::NotFound().json(ApiResponse::error(
            "no quote has been activated for this type yet",
        )),
        err => {
            let detail = if debug {
                err.to_string()
            } else {
                "error fetching quote".to_string()
            };
            HttpResponse::InternalServerError().json(ApiResponse::server_error(detail))
        }
    }
}
