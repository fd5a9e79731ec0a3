//! Genre page view models

use askama::Template;

use crate::models::{Book, Genre};

#[derive(Debug, Template)]
#[template(path = "genre_list.html")]
pub struct GenreListView {
    pub title: &'static str,
    pub genre_list: Vec<Genre>,
}

impl GenreListView {
    pub fn new(genre_list: Vec<Genre>) -> Self {
        Self {
            title: "Genre List",
            genre_list,
        }
    }
}

#[derive(Debug, Template)]
#[template(path = "genre_detail.html")]
pub struct GenreDetailView {
    pub title: &'static str,
    pub genre: Genre,
    pub genre_books: Vec<Book>,
}

impl GenreDetailView {
    pub fn new(genre: Genre, genre_books: Vec<Book>) -> Self {
        Self {
            title: "Genre Detail",
            genre,
            genre_books,
        }
    }
}

/// Create and edit form. The form posts back to the page it was served from.
#[derive(Debug, Template)]
#[template(path = "genre_form.html")]
pub struct GenreFormView {
    pub title: &'static str,
    pub name: String,
    pub errors: Vec<String>,
}

impl GenreFormView {
    /// Empty create form
    pub fn create() -> Self {
        Self {
            title: "Create Genre",
            name: String::new(),
            errors: Vec::new(),
        }
    }

    /// Edit form pre-filled with the stored genre
    pub fn update(genre: &Genre) -> Self {
        Self {
            title: "Update Genre",
            name: genre.name.clone(),
            errors: Vec::new(),
        }
    }

    /// Re-rendered create form after a rejected submission
    pub fn create_rejected(name: String, errors: Vec<String>) -> Self {
        Self {
            title: "Create Genre",
            name,
            errors,
        }
    }

    /// Re-rendered edit form after a rejected submission
    pub fn update_rejected(name: String, errors: Vec<String>) -> Self {
        Self {
            title: "Update Genre",
            name,
            errors,
        }
    }
}

#[derive(Debug, Template)]
#[template(path = "genre_delete.html")]
pub struct GenreDeleteView {
    pub title: &'static str,
    pub genre: Genre,
    pub genre_books: Vec<Book>,
}

impl GenreDeleteView {
    pub fn new(genre: Genre, genre_books: Vec<Book>) -> Self {
        Self {
            title: "Delete Genre",
            genre,
            genre_books,
        }
    }
}
