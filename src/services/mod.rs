//! Business logic services

pub mod genres;

use std::sync::Arc;

use crate::{config::CatalogConfig, repository::CatalogStore};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub genres: genres::GenresService,
    store: Arc<dyn CatalogStore>,
}

impl Services {
    /// Create all services on top of the given store
    pub fn new(store: Arc<dyn CatalogStore>, catalog: &CatalogConfig) -> Self {
        Self {
            genres: genres::GenresService::new(store.clone(), catalog.delete_guard),
            store,
        }
    }

    /// The store backing the services
    pub fn store(&self) -> &Arc<dyn CatalogStore> {
        &self.store
    }
}
