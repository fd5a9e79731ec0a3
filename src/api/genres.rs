//! Genre pages

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::{DeleteGenreForm, GenreForm},
    services::genres::{DeleteOutcome, GenreSubmission},
    views::{render_template, GenreDeleteView, GenreDetailView, GenreFormView, GenreListView},
    AppState,
};

/// Genre list page, also the landing page after a delete
pub const GENRE_LIST_URL: &str = "/catalog/genres";

/// Genre id from the path; unparsable ids go to the error page
type GenreId = WithRejection<Path<i32>, AppError>;

/// Form body; malformed bodies go to the error page
type FormBody<T> = WithRejection<Form<T>, AppError>;

/// List all genres
pub async fn genre_list(State(state): State<AppState>) -> AppResult<Response> {
    let genres = state.services.genres.list().await?;
    render_template(GenreListView::new(genres))
}

/// Genre detail with its books
pub async fn genre_detail(
    State(state): State<AppState>,
    WithRejection(Path(id), _): GenreId,
) -> AppResult<Response> {
    let (genre, books) = state.services.genres.detail(id).await?;
    render_template(GenreDetailView::new(genre, books))
}

/// Empty create form
pub async fn genre_create_get() -> AppResult<Response> {
    render_template(GenreFormView::create())
}

/// Handle the create form
pub async fn genre_create_post(
    State(state): State<AppState>,
    WithRejection(Form(form), _): FormBody<GenreForm>,
) -> AppResult<Response> {
    match state.services.genres.create(&form).await? {
        GenreSubmission::Invalid { name, errors } => {
            render_template(GenreFormView::create_rejected(name, errors))
        }
        GenreSubmission::Existing(genre)
        | GenreSubmission::Created(genre)
        | GenreSubmission::Updated(genre) => Ok(Redirect::to(&genre.url()).into_response()),
    }
}

/// Delete confirmation page. Unknown genres go back to the list.
pub async fn genre_delete_get(
    State(state): State<AppState>,
    WithRejection(Path(id), _): GenreId,
) -> AppResult<Response> {
    let Some((genre, books)) = state.services.genres.delete_preview(id).await? else {
        return Ok(Redirect::to(GENRE_LIST_URL).into_response());
    };
    render_template(GenreDeleteView::new(genre, books))
}

/// Handle the delete confirmation
pub async fn genre_delete_post(
    State(state): State<AppState>,
    WithRejection(Path(id), _): GenreId,
    WithRejection(Form(form), _): FormBody<DeleteGenreForm>,
) -> AppResult<Response> {
    match state.services.genres.delete(id, &form).await? {
        DeleteOutcome::Blocked { genre, books } => {
            render_template(GenreDeleteView::new(genre, books))
        }
        DeleteOutcome::Deleted | DeleteOutcome::Missing => {
            Ok(Redirect::to(GENRE_LIST_URL).into_response())
        }
    }
}

/// Edit form for an existing genre
pub async fn genre_update_get(
    State(state): State<AppState>,
    WithRejection(Path(id), _): GenreId,
) -> AppResult<Response> {
    let genre = state.services.genres.get_for_update(id).await?;
    render_template(GenreFormView::update(&genre))
}

/// Handle the edit form
pub async fn genre_update_post(
    State(state): State<AppState>,
    WithRejection(Path(id), _): GenreId,
    WithRejection(Form(form), _): FormBody<GenreForm>,
) -> AppResult<Response> {
    match state.services.genres.update(id, &form).await? {
        GenreSubmission::Invalid { name, errors } => {
            render_template(GenreFormView::update_rejected(name, errors))
        }
        GenreSubmission::Existing(genre)
        | GenreSubmission::Created(genre)
        | GenreSubmission::Updated(genre) => Ok(Redirect::to(&genre.url()).into_response()),
    }
}
