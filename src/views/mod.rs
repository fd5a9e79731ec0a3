//! View models for the HTML pages
//!
//! Each view carries exactly the data its askama template needs. Templates
//! auto-escape every interpolated value, which is where user-supplied names
//! are made safe for the page.

pub mod error;
pub mod genres;

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::error::AppResult;

pub use error::ErrorView;
pub use genres::{GenreDeleteView, GenreDetailView, GenreFormView, GenreListView};

/// Render a template into an HTML response.
///
/// Rendering failures become `AppError::Template` and reach the error page.
pub fn render_template<T: Template>(template: T) -> AppResult<Response> {
    let html = template.render()?;
    Ok(Html(html).into_response())
}

/// Render the error page with the given status, falling back to plain text
pub fn render_error(status: StatusCode, view: ErrorView) -> Response {
    match view.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render error view: {}", e);
            (status, view.message).into_response()
        }
    }
}
