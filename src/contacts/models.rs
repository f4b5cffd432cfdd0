use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::util::date;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub image: String,
    #[serde(deserialize_with = "date::deserialize")]
    pub last_contact_date: DateTime<Utc>,
    #[serde(deserialize_with = "date::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "date::deserialize")]
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    pub fn has_image(&self) -> bool {
        !self.image.trim().is_empty()
    }

    /// Snapshot used as `original_contact` when building an update request.
    pub fn snapshot(&self) -> OriginalContact {
        OriginalContact::from(self)
    }
}

/// What the contact form collects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub last_contact_date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub last_contact_date: String,
}

impl CreateContactRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        last_contact_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            image: None,
            last_contact_date: last_contact_date.into(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

impl From<ContactFormData> for CreateContactRequest {
    fn from(form: ContactFormData) -> Self {
        Self {
            name: form.name,
            email: form.email,
            image: form.image,
            last_contact_date: form.last_contact_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginalContact {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(deserialize_with = "date::deserialize")]
    pub last_contact_date: DateTime<Utc>,
    #[serde(deserialize_with = "date::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(
        default,
        deserialize_with = "date::deserialize_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl OriginalContact {
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

impl From<&Contact> for OriginalContact {
    fn from(contact: &Contact) -> Self {
        Self {
            name: contact.name.clone(),
            email: contact.email.clone(),
            image: Some(contact.image.clone()),
            last_contact_date: contact.last_contact_date,
            created_at: contact.created_at,
            updated_at: Some(contact.updated_at),
        }
    }
}

/// Only the fields present are sent; the rest stay untouched on the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactRequest {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_contact_date: Option<String>,
    pub original_contact: OriginalContact,
}

impl UpdateContactRequest {
    pub fn new(id: impl Into<String>, original_contact: OriginalContact) -> Self {
        Self {
            id: id.into(),
            name: None,
            email: None,
            image: None,
            last_contact_date: None,
            original_contact,
        }
    }

    pub fn for_contact(contact: &Contact) -> Self {
        Self::new(contact.id.clone(), contact.snapshot())
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn last_contact_date(mut self, date: impl Into<String>) -> Self {
        self.last_contact_date = Some(date.into());
        self
    }

    /// The old image must go when a different one is supplied and there was one.
    pub fn replaces_image(&self) -> bool {
        let Some(new_image) = self.image.as_deref() else {
            return false;
        };
        let old_image = self.original_contact.image();
        old_image != Some(new_image) && old_image.is_some_and(|img| !img.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteContactRequest {
    pub id: String,
    #[serde(default)]
    pub has_image: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_contact_date: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl ContactPatch {
    pub fn touch(updated_at: DateTime<Utc>) -> Self {
        Self {
            name: None,
            email: None,
            image: None,
            last_contact_date: None,
            updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub contact: Contact,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactList {
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deleted {
    pub deleted: bool,
}
