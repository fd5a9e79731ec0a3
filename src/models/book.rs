//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Book record. Books are owned by the wider catalog; genre pages only read them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub summary: Option<String>,
    pub author_id: i32,
    /// Genres this book is filed under
    pub genre_ids: Vec<i32>,
}

impl Book {
    /// Detail page locator
    pub fn url(&self) -> String {
        format!("/catalog/book/{}", self.id)
    }

    /// Summary for display, empty when none was recorded
    pub fn summary_text(&self) -> &str {
        self.summary.as_deref().unwrap_or_default()
    }

    pub fn has_genre(&self, genre_id: i32) -> bool {
        self.genre_ids.contains(&genre_id)
    }
}

/// Create book request (seeding and tests)
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBook {
    pub title: String,
    pub summary: Option<String>,
    pub author_id: i32,
    pub genre_ids: Vec<i32>,
}
