use tokio::task::JoinHandle;
use tracing::warn;

use crate::contacts::Deleted;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::storage::StorageService;

/// Handle to an image deletion running next to a contact write.
///
/// Dropping it detaches the task; it still runs and logs its own outcome.
#[derive(Debug)]
pub struct ImageCleanup {
    contact_id: String,
    handle: JoinHandle<ApiResponse<Deleted>>,
}

impl ImageCleanup {
    pub(crate) fn spawn(storage: StorageService, contact_id: &str, image_url: Option<String>) -> Self {
        let id = contact_id.to_string();
        let handle = tokio::spawn(async move {
            let response = storage.delete_image(&id, image_url.as_deref()).await;
            match &response {
                ApiResponse::Success { data, .. } if !data.deleted => {
                    warn!("No image found to delete for contact {}", id);
                }
                ApiResponse::Failure { message, errors } => {
                    warn!("Failed to delete image for contact {}: {} {:?}", id, message, errors);
                }
                _ => {}
            }
            response
        });

        Self {
            contact_id: contact_id.to_string(),
            handle,
        }
    }

    pub fn contact_id(&self) -> &str {
        &self.contact_id
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub async fn wait(self) -> Result<ApiResponse<Deleted>> {
        Ok(self.handle.await?)
    }
}

/// Outcome of a contact mutation plus the image cleanup it started, if any.
#[derive(Debug)]
pub struct Mutation<T> {
    pub response: ApiResponse<T>,
    pub cleanup: Option<ImageCleanup>,
}

impl<T> Mutation<T> {
    pub fn new(response: ApiResponse<T>, cleanup: Option<ImageCleanup>) -> Self {
        Self { response, cleanup }
    }

    pub fn is_success(&self) -> bool {
        self.response.is_success()
    }

    pub fn into_response(self) -> ApiResponse<T> {
        self.response
    }

    /// Waits for the cleanup (if one was started) and returns the mutation's response.
    pub async fn settle(self) -> (ApiResponse<T>, Option<Result<ApiResponse<Deleted>>>) {
        let cleanup = match self.cleanup {
            Some(cleanup) => Some(cleanup.wait().await),
            None => None,
        };
        (self.response, cleanup)
    }
}
