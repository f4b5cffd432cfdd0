use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use serde_json::{Map, Value};
use tracing::{debug, error};

use crate::contacts::{Contact, ContactPatch};
use crate::error::{ContactsError, Result};

/// Raw records as the store returns them, keyed by contact id in store order.
pub type ContactRecords = Map<String, Value>;

#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn create_contact(&self, contact: &Contact) -> Result<()>;

    /// `None` when the store holds no contacts at all.
    async fn get_contacts(&self) -> Result<Option<ContactRecords>>;

    async fn update_contact(&self, id: &str, patch: &ContactPatch) -> Result<()>;

    async fn delete_contact(&self, id: &str) -> Result<()>;
}

/// REST-over-JSON contact store: one document per contact under `/contacts`.
#[derive(Clone)]
pub struct ContactClient {
    db_url: String,
    client: Client,
}

impl ContactClient {
    pub fn new(db_url: impl Into<String>) -> Self {
        Self::with_client(db_url, Client::new())
    }

    pub fn with_client(db_url: impl Into<String>, client: Client) -> Self {
        Self {
            db_url: db_url.into(),
            client,
        }
    }

    pub fn db_url(&self) -> &str {
        &self.db_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.db_url.trim_end_matches('/'), path)
    }

    fn contact_path(id: &str) -> String {
        format!("/contacts/{}.json", urlencoding::encode(id))
    }

    async fn request(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value> {
        let url = self.url(path);
        let mut req = self.client.request(method.clone(), &url);

        if let Some(json) = body {
            req = req.json(json);
        }

        debug!("Contact store request: {} {}", method, url);

        let resp = req.send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        debug!("Contact store response: {} - {}", status, text);

        if status == StatusCode::NOT_FOUND {
            return Err(ContactsError::NotFound(url));
        }
        if !status.is_success() {
            return Err(ContactsError::Http {
                status: status.as_u16(),
                message: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl ContactStore for ContactClient {
    async fn create_contact(&self, contact: &Contact) -> Result<()> {
        let body = serde_json::to_value(contact)?;
        self.request(Method::PUT, &Self::contact_path(&contact.id), Some(&body))
            .await
            .inspect_err(|e| error!("Error creating contact: {}", e))?;
        Ok(())
    }

    async fn get_contacts(&self) -> Result<Option<ContactRecords>> {
        let value = self
            .request(Method::GET, "/contacts.json", None)
            .await
            .inspect_err(|e| error!("Error getting contacts: {}", e))?;

        match value {
            Value::Null => Ok(None),
            Value::Object(records) if records.is_empty() => Ok(None),
            Value::Object(records) => Ok(Some(records)),
            other => Err(ContactsError::InvalidResponse(format!(
                "expected an object of contacts, got {}",
                other
            ))),
        }
    }

    async fn update_contact(&self, id: &str, patch: &ContactPatch) -> Result<()> {
        let body = serde_json::to_value(patch)?;
        self.request(Method::PATCH, &Self::contact_path(id), Some(&body))
            .await
            .inspect_err(|e| error!("Error updating contact {}: {}", id, e))?;
        Ok(())
    }

    async fn delete_contact(&self, id: &str) -> Result<()> {
        self.request(Method::DELETE, &Self::contact_path(id), None)
            .await
            .inspect_err(|e| error!("Error deleting contact {}: {}", id, e))?;
        Ok(())
    }
}
