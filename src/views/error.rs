//! Error page view model

use askama::Template;
use axum::http::StatusCode;

#[derive(Debug, Template)]
#[template(path = "error.html")]
pub struct ErrorView {
    pub title: String,
    pub status: String,
    pub message: String,
}

impl ErrorView {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            status: status.to_string(),
            message: message.into(),
        }
    }
}
