use std::sync::Arc;

use reqwest::Client;
use tracing::info;

use crate::config::Config;
use crate::contacts::{ContactClient, ContactService, ContactStore};
use crate::storage::{ImageStore, StorageClient, StorageService};

/// The contact and storage services wired to their stores.
#[derive(Clone)]
pub struct ContactsModule {
    pub contacts: ContactService,
    pub storage: StorageService,
}

impl ContactsModule {
    pub fn new(store: Arc<dyn ContactStore>, images: Arc<dyn ImageStore>) -> Self {
        let storage = StorageService::new(images);
        let contacts = ContactService::new(store, storage.clone());
        Self { contacts, storage }
    }

    pub fn from_config(config: &Config) -> Self {
        info!(
            "Contact store at {}, image storage at {}",
            config.database.url, config.storage.base_url
        );

        let http = Client::new();
        let store = ContactClient::with_client(&config.database.url, http.clone());
        let images = StorageClient::with_client(&config.storage.base_url, http);
        Self::new(Arc::new(store), Arc::new(images))
    }
}
