use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{debug, info, warn};

use super::cleanup::{ImageCleanup, Mutation};
use super::client::ContactStore;
use super::models::*;
use crate::error::{ContactsError, Result};
use crate::response::ApiResponse;
use crate::storage::StorageService;
use crate::util::{new_contact_id, parse_date};

#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn ContactStore>,
    storage: StorageService,
}

impl ContactService {
    pub fn new(store: Arc<dyn ContactStore>, storage: StorageService) -> Self {
        Self { store, storage }
    }

    pub fn storage(&self) -> &StorageService {
        &self.storage
    }

    pub async fn create(&self, request: &CreateContactRequest) -> ApiResponse<ContactResponse> {
        match self.try_create(request).await {
            Ok(contact) => {
                info!("Created contact {}", contact.id);
                ApiResponse::ok(ContactResponse { contact })
            }
            Err(e) => ApiResponse::from_error("Error creating contact", &e),
        }
    }

    async fn try_create(&self, request: &CreateContactRequest) -> Result<Contact> {
        require("name", &request.name)?;
        require("email", &request.email)?;
        require("lastContactDate", &request.last_contact_date)?;

        let now = Utc::now();
        let contact = Contact {
            id: new_contact_id(),
            name: request.name.clone(),
            email: request.email.clone(),
            image: request.image.clone().unwrap_or_default(),
            last_contact_date: parse_date(&request.last_contact_date)?,
            created_at: now,
            updated_at: now,
        };

        self.store.create_contact(&contact).await?;
        Ok(contact)
    }

    pub async fn get_all(&self) -> ApiResponse<ContactList> {
        match self.store.get_contacts().await {
            Ok(None) => ApiResponse::ok(ContactList::default()),
            Ok(Some(records)) => {
                let contacts = records
                    .into_iter()
                    .filter_map(|(id, record)| match rehydrate(&id, record) {
                        Ok(contact) => Some(contact),
                        Err(e) => {
                            warn!("Skipping unreadable contact record {}: {}", id, e);
                            None
                        }
                    })
                    .collect();
                ApiResponse::ok(ContactList { contacts })
            }
            Err(e) => ApiResponse::from_error("Error getting contacts", &e),
        }
    }

    /// Blank `name`/`email`/`lastContactDate` are treated as absent and never overwrite.
    ///
    /// The old image is only deleted once the request has been validated.
    pub async fn update(&self, request: &UpdateContactRequest) -> Mutation<ContactResponse> {
        let patch = match build_patch(request, Utc::now()) {
            Ok(patch) => patch,
            Err(e) => {
                return Mutation::new(ApiResponse::from_error("Error updating contact", &e), None);
            }
        };

        let cleanup = if request.replaces_image() {
            debug!("Contact {} replaces its image, deleting the old one", request.id);
            Some(ImageCleanup::spawn(
                self.storage.clone(),
                &request.id,
                request.original_contact.image.clone(),
            ))
        } else {
            None
        };

        let response = match self.store.update_contact(&request.id, &patch).await {
            Ok(()) => ApiResponse::ok(ContactResponse {
                contact: merge(request, patch),
            }),
            Err(e) => ApiResponse::from_error("Error updating contact", &e),
        };
        Mutation::new(response, cleanup)
    }

    pub async fn delete(&self, id: &str, has_image: bool, image_url: Option<&str>) -> Mutation<Deleted> {
        let cleanup = has_image.then(|| {
            ImageCleanup::spawn(self.storage.clone(), id, image_url.map(str::to_string))
        });

        let response = match self.store.delete_contact(id).await {
            Ok(()) => {
                info!("Deleted contact {}", id);
                ApiResponse::ok(Deleted { deleted: true })
            }
            Err(e) => ApiResponse::from_error("Error deleting contact", &e),
        };
        Mutation::new(response, cleanup)
    }

    pub async fn delete_request(&self, request: &DeleteContactRequest) -> Mutation<Deleted> {
        self.delete(&request.id, request.has_image, request.image_url.as_deref())
            .await
    }
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ContactsError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

fn build_patch(request: &UpdateContactRequest, now: DateTime<Utc>) -> Result<ContactPatch> {
    let mut patch = ContactPatch::touch(now);
    patch.name = present(&request.name).map(str::to_string);
    patch.email = present(&request.email).map(str::to_string);
    patch.image = request.image.clone();
    patch.last_contact_date = present(&request.last_contact_date)
        .map(parse_date)
        .transpose()?;
    Ok(patch)
}

/// The contact as the store now holds it: the snapshot with the patch applied.
fn merge(request: &UpdateContactRequest, patch: ContactPatch) -> Contact {
    let original = &request.original_contact;
    Contact {
        id: request.id.clone(),
        name: patch.name.unwrap_or_else(|| original.name.clone()),
        email: patch.email.unwrap_or_else(|| original.email.clone()),
        image: patch
            .image
            .or_else(|| original.image.clone())
            .unwrap_or_default(),
        last_contact_date: patch.last_contact_date.unwrap_or(original.last_contact_date),
        created_at: original.created_at,
        updated_at: patch.updated_at,
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// The store key is the contact id, whatever the record body says.
fn rehydrate(id: &str, record: Value) -> Result<Contact> {
    let mut contact: Contact = serde_json::from_value(record)?;
    contact.id = id.to_string();
    Ok(contact)
}
