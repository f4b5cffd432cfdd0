#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use contact_book::ContactsModule;
use contact_book::contacts::{Contact, ContactPatch, ContactRecords, ContactStore};
use contact_book::error::{ContactsError, Result};
use contact_book::storage::{ImageDeletion, ImageFile, ImageStore};
use serde_json::Value;
use tokio::sync::Mutex;

/// In-memory contact store that applies patches the way the REST store does.
#[derive(Default)]
pub struct MemoryContactStore {
    pub records: Mutex<ContactRecords>,
    pub patches: Mutex<Vec<(String, ContactPatch)>>,
    pub fail_with: Option<String>,
}

impl MemoryContactStore {
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<()> {
        match &self.fail_with {
            Some(message) => Err(ContactsError::Network(message.clone())),
            None => Ok(()),
        }
    }

    pub async fn insert_raw(&self, id: &str, record: Value) {
        self.records.lock().await.insert(id.to_string(), record);
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn create_contact(&self, contact: &Contact) -> Result<()> {
        self.check()?;
        let value = serde_json::to_value(contact)?;
        self.records.lock().await.insert(contact.id.clone(), value);
        Ok(())
    }

    async fn get_contacts(&self) -> Result<Option<ContactRecords>> {
        self.check()?;
        let records = self.records.lock().await;
        if records.is_empty() {
            return Ok(None);
        }
        Ok(Some(records.clone()))
    }

    async fn update_contact(&self, id: &str, patch: &ContactPatch) -> Result<()> {
        self.check()?;
        self.patches.lock().await.push((id.to_string(), patch.clone()));

        let mut records = self.records.lock().await;
        let record = records
            .entry(id.to_string())
            .or_insert_with(|| Value::Object(Default::default()));
        if let (Value::Object(target), Value::Object(fields)) = (record, serde_json::to_value(patch)?) {
            for (key, value) in fields {
                target.insert(key, value);
            }
        }
        Ok(())
    }

    async fn delete_contact(&self, id: &str) -> Result<()> {
        self.check()?;
        self.records.lock().await.remove(id);
        Ok(())
    }
}

/// Image store that only records what it was asked to do.
#[derive(Default)]
pub struct RecordingImageStore {
    pub uploads: Mutex<Vec<(String, String)>>,
    pub deletes: Mutex<Vec<(String, Option<String>)>>,
    pub fail_uploads: bool,
}

#[async_trait]
impl ImageStore for RecordingImageStore {
    async fn upload_image(&self, file: &ImageFile, contact_id: &str) -> Result<String> {
        if self.fail_uploads {
            return Err(ContactsError::Http {
                status: 500,
                message: "upload rejected".to_string(),
            });
        }
        self.uploads
            .lock()
            .await
            .push((contact_id.to_string(), file.name.clone()));
        Ok(format!("https://images.test/o/contacts%2F{}.{}?alt=media", contact_id, file.extension()))
    }

    async fn delete_image(&self, contact_id: &str, image_url: Option<&str>) -> ImageDeletion {
        self.deletes
            .lock()
            .await
            .push((contact_id.to_string(), image_url.map(str::to_string)));
        ImageDeletion::Deleted {
            key: format!("contacts/{}.jpg", contact_id),
        }
    }
}

pub fn module(
    store: Arc<MemoryContactStore>,
    images: Arc<RecordingImageStore>,
) -> ContactsModule {
    ContactsModule::new(store, images)
}

pub fn fresh_module() -> (ContactsModule, Arc<MemoryContactStore>, Arc<RecordingImageStore>) {
    let store = Arc::new(MemoryContactStore::default());
    let images = Arc::new(RecordingImageStore::default());
    (module(store.clone(), images.clone()), store, images)
}
