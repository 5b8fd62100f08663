//! REST API error types
//!
//! Every request-level failure funnels through these types so clients
//! always receive the same envelope: a JSON object whose `error` field is
//! either a message string or a field→message map. Handlers never write
//! status codes or bodies directly.

use sr_core::FieldViolation;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ErrorDetail,
}

/// The `error` field: a plain message, or one message per violated field.
///
/// Map entries keep the order of the violations handed to the codec, so
/// the same violation set always serializes to the same bytes.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Fields(IndexMap<String, String>),
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body missing or not decodable into the schema (400)
    #[error("Decode failed: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    /// One or more field constraints failed (400)
    #[error("Validation failed on {} field(s) {location}", violations.len())]
    Validation {
        violations: Vec<FieldViolation>,
        location: ErrorLocation,
    },

    /// Internal server error (500); message must already be client-safe
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn decode(message: impl Into<String>) -> Self {
        ApiError::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        ApiError::Validation {
            violations,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, detail) = match self {
            ApiError::Decode { message, .. } => {
                (StatusCode::BAD_REQUEST, ErrorDetail::Message(message))
            }
            ApiError::Validation { violations, .. } => {
                // Every violation appears; none are dropped or merged
                let fields: IndexMap<String, String> = violations
                    .into_iter()
                    .map(|v| (v.field, v.message))
                    .collect();
                (StatusCode::BAD_REQUEST, ErrorDetail::Fields(fields))
            }
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail::Message(message),
            ),
        };

        (status, Json(ApiErrorResponse { error: detail })).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
