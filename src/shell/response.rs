// API response envelope shared by every endpoint.
//
// Shape on the wire: {status, statusCode, message, success, data}, plus a
// stable machine-readable `code` on domain failures.

use crate::modules::ticketing::errors::TicketingError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub status: String,
    pub status_code: u16,
    pub message: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    fn build(
        status: StatusCode,
        message: String,
        success: bool,
        code: Option<&'static str>,
        data: Option<T>,
    ) -> Response {
        let body = ApiResponse {
            status: status.canonical_reason().unwrap_or_default().to_string(),
            status_code: status.as_u16(),
            message,
            success,
            code,
            data,
        };
        (status, Json(body)).into_response()
    }

    pub fn ok(message: impl Into<String>, data: T) -> Response {
        Self::build(StatusCode::OK, message.into(), true, None, Some(data))
    }

    pub fn created(message: impl Into<String>, data: T) -> Response {
        Self::build(StatusCode::CREATED, message.into(), true, None, Some(data))
    }
}

impl ApiResponse<()> {
    pub fn ok_empty(message: impl Into<String>) -> Response {
        Self::build(StatusCode::OK, message.into(), true, None, None)
    }

    pub fn failure(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
        Self::build(status, message.into(), false, Some(code), None)
    }

    pub fn unprocessable(message: impl Into<String>) -> Response {
        Self::failure(
            StatusCode::UNPROCESSABLE_ENTITY,
            "VALIDATION_FAILED",
            message,
        )
    }

    pub fn bad_request(message: impl Into<String>) -> Response {
        Self::failure(StatusCode::BAD_REQUEST, "VALIDATION_FAILED", message)
    }
}

/// Maps a domain error to its response. Store failures become an opaque 500.
pub fn error_response(err: TicketingError) -> Response {
    let status = match &err {
        TicketingError::NoAvailableSeats | TicketingError::SeatAlreadyOccupied { .. } => {
            StatusCode::CONFLICT
        }
        TicketingError::ReceiptNotFound(_)
        | TicketingError::ReceiptNotFoundById(_)
        | TicketingError::NoReceiptsFound(_) => StatusCode::NOT_FOUND,
        TicketingError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let message = match &err {
        TicketingError::Store(inner) => {
            tracing::error!(error = %inner, "unexpected store failure");
            "An unexpected error occurred.".to_string()
        }
        other => other.to_string(),
    };
    ApiResponse::failure(status, err.code(), message)
}
