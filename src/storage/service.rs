use std::sync::Arc;

use tracing::debug;

use super::client::ImageStore;
use super::types::{ImageFile, UploadedImage};
use crate::contacts::Deleted;
use crate::response::ApiResponse;

#[derive(Clone)]
pub struct StorageService {
    images: Arc<dyn ImageStore>,
}

impl StorageService {
    pub fn new(images: Arc<dyn ImageStore>) -> Self {
        Self { images }
    }

    pub async fn upload_image(&self, file: &ImageFile, contact_id: &str) -> ApiResponse<UploadedImage> {
        match self.images.upload_image(file, contact_id).await {
            Ok(url) => ApiResponse::ok(UploadedImage { url }),
            Err(e) => ApiResponse::from_error("Error uploading image", &e),
        }
    }

    /// `deleted` is false only when no stored image could be found.
    pub async fn delete_image(&self, contact_id: &str, image_url: Option<&str>) -> ApiResponse<Deleted> {
        let outcome = self.images.delete_image(contact_id, image_url).await;
        debug!("Image deletion for contact {}: {:?}", contact_id, outcome);
        ApiResponse::ok(Deleted {
            deleted: outcome.is_gone(),
        })
    }
}
