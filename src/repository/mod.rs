//! Repository layer: the catalog document store

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{book::CreateBook, Book, Genre},
};

pub use memory::MemoryCatalogStore;
pub use postgres::PgCatalogStore;

/// Id and filter based access to genre and book records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Check that the store answers
    async fn ping(&self) -> AppResult<()>;

    /// All genres, ascending by name
    async fn genres_list(&self) -> AppResult<Vec<Genre>>;

    async fn genres_get_by_id(&self, id: i32) -> AppResult<Option<Genre>>;

    /// Genre whose name matches exactly
    async fn genres_find_by_name(&self, name: &str) -> AppResult<Option<Genre>>;

    async fn genres_create(&self, name: &str) -> AppResult<Genre>;

    /// Rename a genre in place. Returns `None` when the id is unknown.
    async fn genres_update_name(&self, id: i32, name: &str) -> AppResult<Option<Genre>>;

    /// Remove a genre. Unknown ids are not an error.
    async fn genres_delete(&self, id: i32) -> AppResult<()>;

    /// Books filed under a genre
    async fn books_by_genre(&self, genre_id: i32) -> AppResult<Vec<Book>>;

    /// Books written by an author
    async fn books_by_author(&self, author_id: i32) -> AppResult<Vec<Book>>;

    async fn books_create(&self, data: &CreateBook) -> AppResult<Book>;
}
