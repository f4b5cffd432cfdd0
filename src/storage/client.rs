use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, error, warn};

use super::types::{IMAGE_EXTENSIONS, ImageDeletion, ImageFile, storage_key};
use crate::error::{ContactsError, Result};

#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Stores the file under the contact's key and returns its media URL.
    async fn upload_image(&self, file: &ImageFile, contact_id: &str) -> Result<String>;

    /// Best effort: never fails, every problem is logged.
    async fn delete_image(&self, contact_id: &str, image_url: Option<&str>) -> ImageDeletion;
}

#[derive(Clone)]
pub struct StorageClient {
    base_url: String,
    client: Client,
}

impl StorageClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn object_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(key))
    }

    pub fn media_url(&self, key: &str) -> String {
        format!("{}?alt=media", self.object_url(key))
    }

    /// Storage key carried by one of our own URLs, decoded.
    ///
    /// `None` for foreign URLs and for URLs with nothing after the base.
    pub fn key_from_url(&self, image_url: &str) -> Option<String> {
        let rest = image_url.strip_prefix(&self.base_url)?;
        let rest = rest.strip_prefix('/')?;
        let raw = rest.split(['?', '#']).next().unwrap_or_default();
        if raw.is_empty() {
            return None;
        }
        let key = urlencoding::decode(raw).ok()?.into_owned();
        Some(key)
    }

    pub async fn delete_object(&self, key: &str) -> Result<()> {
        let url = self.object_url(key);
        debug!("Storage delete: {}", url);

        let resp = self.client.delete(&url).send().await?;
        let status = resp.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ContactsError::NotFound(key.to_string()));
        }
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(ContactsError::Http {
                status: status.as_u16(),
                message: text,
            });
        }
        Ok(())
    }

    async fn delete_guessed(&self, contact_id: &str) -> ImageDeletion {
        for ext in IMAGE_EXTENSIONS {
            let key = storage_key(contact_id, ext);
            match self.delete_object(&key).await {
                Ok(()) => {
                    debug!("Deleted image {} for contact {}", key, contact_id);
                    return ImageDeletion::Deleted { key };
                }
                Err(e) if e.is_not_found() => continue,
                Err(e) => {
                    warn!("Failed to delete candidate image {}: {}", key, e);
                    continue;
                }
            }
        }
        debug!("No stored image found for contact {}", contact_id);
        ImageDeletion::Missing
    }
}

#[async_trait]
impl ImageStore for StorageClient {
    async fn upload_image(&self, file: &ImageFile, contact_id: &str) -> Result<String> {
        let key = storage_key(contact_id, file.extension());
        let url = format!("{}?uploadType=media", self.object_url(&key));

        debug!("Storage upload: {} ({}, {} bytes)", url, file.content_type, file.bytes.len());

        let resp = self
            .client
            .post(&url)
            .header("Content-Type", &file.content_type)
            .body(file.bytes.clone())
            .send()
            .await
            .inspect_err(|e| error!("Error uploading image: {}", e))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            error!("Error uploading image: {} - {}", status, text);
            return Err(ContactsError::Http {
                status: status.as_u16(),
                message: text,
            });
        }

        Ok(self.media_url(&key))
    }

    async fn delete_image(&self, contact_id: &str, image_url: Option<&str>) -> ImageDeletion {
        if let Some(key) = image_url.and_then(|url| self.key_from_url(url)) {
            match self.delete_object(&key).await {
                Ok(()) => return ImageDeletion::Deleted { key },
                Err(e) if e.is_not_found() => return ImageDeletion::AlreadyDeleted { key },
                Err(e) => {
                    warn!("Failed to delete image {} by URL, guessing instead: {}", key, e);
                }
            }
        }

        self.delete_guessed(contact_id).await
    }
}
