//! Data models for the catalog

pub mod book;
pub mod genre;

// Re-export commonly used types
pub use book::{Book, CreateBook};
pub use genre::{DeleteGenreForm, Genre, GenreForm, GenreInput, Validated};
