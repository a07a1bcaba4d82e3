use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use std::time::Duration;
use thiserror::Error;

use crate::models::response::ApiResponse;

/// A timestamp string that could not be interpreted as a date/time.
#[derive(Debug, Error)]
#[error("unrecognized timestamp '{input}'")]
pub struct ParseError {
    pub input: String,
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("missing or empty field '{0}'")]
    MissingField(&'static str),

    #[error("field 'users' contains no recipients")]
    EmptyRecipients,

    #[error("channel '{0}' is not usable as a queue name component")]
    InvalidChannel(String),

    #[error("invalid timestamp in field '{field}'")]
    InvalidTimestamp {
        field: &'static str,
        #[source]
        source: ParseError,
    },
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("failed to serialize message {message_id}")]
    Serialize {
        message_id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("connection to broker at {endpoint} failed")]
    Connect {
        endpoint: String,
        #[source]
        source: lapin::Error,
    },

    #[error("broker operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("AMQP channel creation failed")]
    Channel(#[source] lapin::Error),

    #[error("declaring queue '{queue}' failed")]
    QueueDeclare {
        queue: String,
        #[source]
        source: lapin::Error,
    },

    #[error("publishing to queue '{queue}' failed")]
    Publish {
        queue: String,
        #[source]
        source: lapin::Error,
    },
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Publish(#[from] PublishError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "Invalid notification request"),
            ApiError::Publish(PublishError::Serialize { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Message encoding failed")
            }
            ApiError::Publish(_) => (StatusCode::SERVICE_UNAVAILABLE, "Message broker unavailable"),
        };

        let body = ApiResponse::<()>::error(self.to_string(), message.to_string());

        (status, Json(body)).into_response()
    }
}
