// Reply bodies shared by the marks routes, plus the error -> status mapping.

use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde::Serialize;

use crate::modules::marks::application::errors::ApplicationError;
use crate::modules::marks::core::mark::Mark;
use crate::modules::marks::core::record::{DeleteOutcome, Record, SearchOutcome};

#[derive(Debug, Serialize)]
pub struct MarkAddedResponse {
    pub student: String,
    pub mark: Mark,
    pub status: &'static str,
}

impl From<Record> for MarkAddedResponse {
    fn from(record: Record) -> Self {
        Self {
            student: record.student,
            mark: record.mark,
            status: "success",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub status: &'static str,
    pub student: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marks: Option<Mark>,
}

impl From<SearchOutcome> for SearchResponse {
    fn from(outcome: SearchOutcome) -> Self {
        match outcome {
            SearchOutcome::Found(record) => Self {
                status: "found",
                student: record.student,
                marks: Some(record.mark),
            },
            SearchOutcome::NotFound(student) => Self {
                status: "not found",
                student,
                marks: None,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub student: String,
    pub status: &'static str,
}

impl From<DeleteOutcome> for DeleteResponse {
    fn from(outcome: DeleteOutcome) -> Self {
        match outcome {
            DeleteOutcome::Deleted(student) => Self {
                student,
                status: "deleted",
            },
            DeleteOutcome::NotFound(student) => Self {
                student,
                status: "not found",
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub student: String,
    pub error: String,
}

pub fn error_response(student: String, err: ApplicationError) -> Response {
    let status = match &err {
        ApplicationError::InvalidMark(_) => StatusCode::BAD_REQUEST,
        ApplicationError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let body = ErrorResponse {
        status: "error",
        student,
        error: err.to_string(),
    };
    (status, Json(body)).into_response()
}
