use serde::{Deserialize, Serialize};

/// Common image extensions, in the order a delete without a known key tries them.
pub const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "gif", "webp", "bmp", "svg"];

pub const KEY_PREFIX: &str = "contacts";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Text after the last dot, or the whole name when there is none.
    pub fn extension(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

pub fn storage_key(contact_id: &str, extension: &str) -> String {
    format!("{}/{}.{}", KEY_PREFIX, contact_id, extension)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageDeletion {
    Deleted { key: String },
    AlreadyDeleted { key: String },
    Missing,
}

impl ImageDeletion {
    pub fn is_gone(&self) -> bool {
        !matches!(self, ImageDeletion::Missing)
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            ImageDeletion::Deleted { key } | ImageDeletion::AlreadyDeleted { key } => Some(key),
            ImageDeletion::Missing => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub url: String,
}
