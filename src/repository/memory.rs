//! In-process catalog store, for tests and database-free demo runs

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::CatalogStore;
use crate::{
    error::AppResult,
    models::{book::CreateBook, Book, Genre},
};

#[derive(Debug, Default)]
struct Tables {
    genres: BTreeMap<i32, Genre>,
    books: BTreeMap<i32, Book>,
    next_genre_id: i32,
    next_book_id: i32,
}

#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    tables: RwLock<Tables>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored genres
    pub async fn genre_count(&self) -> usize {
        self.tables.read().await.genres.len()
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }

    async fn genres_list(&self) -> AppResult<Vec<Genre>> {
        let tables = self.tables.read().await;
        let mut genres: Vec<Genre> = tables.genres.values().cloned().collect();
        genres.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(genres)
    }

    async fn genres_get_by_id(&self, id: i32) -> AppResult<Option<Genre>> {
        Ok(self.tables.read().await.genres.get(&id).cloned())
    }

    async fn genres_find_by_name(&self, name: &str) -> AppResult<Option<Genre>> {
        let tables = self.tables.read().await;
        Ok(tables.genres.values().find(|g| g.name == name).cloned())
    }

    async fn genres_create(&self, name: &str) -> AppResult<Genre> {
        let mut tables = self.tables.write().await;
        tables.next_genre_id += 1;
        let genre = Genre {
            id: tables.next_genre_id,
            name: name.to_string(),
        };
        tables.genres.insert(genre.id, genre.clone());
        Ok(genre)
    }

    async fn genres_update_name(&self, id: i32, name: &str) -> AppResult<Option<Genre>> {
        let mut tables = self.tables.write().await;
        Ok(tables.genres.get_mut(&id).map(|genre| {
            genre.name = name.to_string();
            genre.clone()
        }))
    }

    async fn genres_delete(&self, id: i32) -> AppResult<()> {
        self.tables.write().await.genres.remove(&id);
        Ok(())
    }

    async fn books_by_genre(&self, genre_id: i32) -> AppResult<Vec<Book>> {
        let tables = self.tables.read().await;
        Ok(tables
            .books
            .values()
            .filter(|b| b.has_genre(genre_id))
            .cloned()
            .collect())
    }

    async fn books_by_author(&self, author_id: i32) -> AppResult<Vec<Book>> {
        let tables = self.tables.read().await;
        Ok(tables
            .books
            .values()
            .filter(|b| b.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn books_create(&self, data: &CreateBook) -> AppResult<Book> {
        let mut tables = self.tables.write().await;
        tables.next_book_id += 1;
        let book = Book {
            id: tables.next_book_id,
            title: data.title.clone(),
            summary: data.summary.clone(),
            author_id: data.author_id,
            genre_ids: data.genre_ids.clone(),
        };
        tables.books.insert(book.id, book.clone());
        Ok(book)
    }
}
