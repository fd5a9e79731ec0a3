//! Library catalog server
//!
//! Server-rendered pages for browsing and maintaining the genres of a library
//! catalog, backed by Postgres or an in-process store.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod views;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(config: &AppConfig, store: Arc<dyn repository::CatalogStore>) -> Self {
        Self {
            services: Arc::new(services::Services::new(store, &config.catalog)),
        }
    }
}
