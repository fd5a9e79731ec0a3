//! Genre workflow: list, detail, create, delete and update

use std::sync::Arc;

use crate::{
    config::DeleteGuard,
    error::{AppError, AppResult},
    models::{Book, DeleteGenreForm, Genre, GenreForm},
    repository::CatalogStore,
};

const GENRE_NOT_FOUND: &str = "Genre not found";

/// Result of a create or update submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenreSubmission {
    /// Input failed the form rules. Carries the cleaned value for the re-rendered form.
    Invalid { name: String, errors: Vec<String> },
    /// A genre with the same name already existed; nothing was written
    Existing(Genre),
    Created(Genre),
    Updated(Genre),
}

/// Result of a delete confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Books still reference the genre; nothing was deleted
    Blocked { genre: Genre, books: Vec<Book> },
    Deleted,
    /// The genre was already gone
    Missing,
}

#[derive(Clone)]
pub struct GenresService {
    store: Arc<dyn CatalogStore>,
    delete_guard: DeleteGuard,
}

impl GenresService {
    pub fn new(store: Arc<dyn CatalogStore>, delete_guard: DeleteGuard) -> Self {
        Self {
            store,
            delete_guard,
        }
    }

    /// All genres, ascending by name
    pub async fn list(&self) -> AppResult<Vec<Genre>> {
        self.store.genres_list().await
    }

    /// Genre and the books filed under it
    pub async fn detail(&self, id: i32) -> AppResult<(Genre, Vec<Book>)> {
        let (genre, books) = self.genre_with_books(id).await?;
        let genre = genre.ok_or_else(|| AppError::NotFound(GENRE_NOT_FOUND.to_string()))?;
        Ok((genre, books))
    }

    /// Validate the form and create the genre unless one with that name exists.
    ///
    /// The name lookup and the insert are separate round-trips, so two
    /// concurrent submissions of the same name can both insert.
    pub async fn create(&self, form: &GenreForm) -> AppResult<GenreSubmission> {
        let checked = form.sanitize().check();
        if !checked.is_valid() {
            tracing::debug!(errors = ?checked.errors, "Rejected genre create form");
            return Ok(GenreSubmission::Invalid {
                name: checked.value.name,
                errors: checked.errors,
            });
        }

        let name = checked.value.name;
        if let Some(existing) = self.store.genres_find_by_name(&name).await? {
            tracing::debug!(id = existing.id, "Genre already exists");
            return Ok(GenreSubmission::Existing(existing));
        }

        let genre = self.store.genres_create(&name).await?;
        tracing::info!(id = genre.id, name = %genre.name, "Created genre");
        Ok(GenreSubmission::Created(genre))
    }

    /// Genre and its books for the delete confirmation page, or `None` when
    /// the genre does not exist.
    pub async fn delete_preview(&self, id: i32) -> AppResult<Option<(Genre, Vec<Book>)>> {
        let (genre, books) = self.genre_with_books(id).await?;
        Ok(genre.map(|genre| (genre, books)))
    }

    /// Delete a genre once no book blocks it.
    ///
    /// `path_id` is used when the form does not carry a `genreid`.
    pub async fn delete(&self, path_id: i32, form: &DeleteGenreForm) -> AppResult<DeleteOutcome> {
        let genre_id = form.genreid.unwrap_or(path_id);

        let blocking_books = async {
            match self.delete_guard {
                DeleteGuard::Genre => self.store.books_by_genre(genre_id).await,
                DeleteGuard::Author => match form.authorid {
                    Some(author_id) => self.store.books_by_author(author_id).await,
                    None => Ok(Vec::new()),
                },
            }
        };
        let (genre, books) = tokio::try_join!(self.store.genres_get_by_id(genre_id), blocking_books)?;

        let Some(genre) = genre else {
            tracing::debug!(id = genre_id, "Genre to delete is already gone");
            return Ok(DeleteOutcome::Missing);
        };

        if !books.is_empty() {
            tracing::info!(
                id = genre.id,
                books = books.len(),
                guard = ?self.delete_guard,
                "Genre deletion blocked by books"
            );
            return Ok(DeleteOutcome::Blocked { genre, books });
        }

        self.store.genres_delete(genre.id).await?;
        tracing::info!(id = genre.id, name = %genre.name, "Deleted genre");
        Ok(DeleteOutcome::Deleted)
    }

    /// Genre to pre-fill the edit form
    pub async fn get_for_update(&self, id: i32) -> AppResult<Genre> {
        self.store
            .genres_get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(GENRE_NOT_FOUND.to_string()))
    }

    /// Validate the form and rename the genre, keeping its id
    pub async fn update(&self, id: i32, form: &GenreForm) -> AppResult<GenreSubmission> {
        let checked = form.sanitize().check();
        if !checked.is_valid() {
            tracing::debug!(id, errors = ?checked.errors, "Rejected genre update form");
            return Ok(GenreSubmission::Invalid {
                name: checked.value.name,
                errors: checked.errors,
            });
        }

        let genre = self
            .store
            .genres_update_name(id, &checked.value.name)
            .await?
            .ok_or_else(|| AppError::NotFound(GENRE_NOT_FOUND.to_string()))?;
        tracing::info!(id = genre.id, name = %genre.name, "Updated genre");
        Ok(GenreSubmission::Updated(genre))
    }

    /// Fetch a genre and the books filed under it concurrently
    async fn genre_with_books(&self, id: i32) -> AppResult<(Option<Genre>, Vec<Book>)> {
        tokio::try_join!(self.store.genres_get_by_id(id), self.store.books_by_genre(id))
    }
}
