//! Turns query rejections into HTTP responses.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::period_finder::{error::QueryError, models::ErrorBody};

impl QueryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            QueryError::InvalidClass | QueryError::MissingDay => StatusCode::BAD_REQUEST,
            QueryError::UnknownDay { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
