use axum::{extract::Path, extract::State, response::Response};

use crate::shell::response::{ApiResponse, error_response};
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(receipt_id): Path<i64>) -> Response {
    match state.release_handler.handle(receipt_id).await {
        Ok(()) => ApiResponse::ok_empty("Receipt deleted successfully."),
        Err(err) => error_response(err),
    }
}
