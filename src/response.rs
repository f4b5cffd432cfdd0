use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ContactsError, Result};

/// Envelope returned by every service call.
///
/// Exactly one shape is ever produced: a success carries `data` (and maybe a
/// `message`), a failure carries a `message` and the underlying error texts.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success { data: T, message: Option<String> },
    Failure { message: String, errors: Vec<String> },
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        ApiResponse::Success { data, message: None }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        ApiResponse::Success {
            data,
            message: Some(message.into()),
        }
    }

    pub fn failure(message: impl Into<String>, errors: Vec<String>) -> Self {
        ApiResponse::Failure {
            message: message.into(),
            errors,
        }
    }

    pub fn from_error(message: impl Into<String>, error: &ContactsError) -> Self {
        Self::failure(message, vec![error.to_string()])
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResponse::Success { data, .. } => Some(data),
            ApiResponse::Failure { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ApiResponse::Success { message, .. } => message.as_deref(),
            ApiResponse::Failure { message, .. } => Some(message),
        }
    }

    pub fn errors(&self) -> &[String] {
        match self {
            ApiResponse::Success { .. } => &[],
            ApiResponse::Failure { errors, .. } => errors,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResponse<U> {
        match self {
            ApiResponse::Success { data, message } => ApiResponse::Success {
                data: f(data),
                message,
            },
            ApiResponse::Failure { message, errors } => ApiResponse::Failure { message, errors },
        }
    }

    pub fn into_result(self) -> Result<T> {
        match self {
            ApiResponse::Success { data, .. } => Ok(data),
            ApiResponse::Failure { message, errors } => {
                Err(ContactsError::Service { message, errors })
            }
        }
    }
}

impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        match self {
            ApiResponse::Success { data, message } => {
                map.serialize_entry("success", &true)?;
                map.serialize_entry("data", data)?;
                if let Some(message) = message {
                    map.serialize_entry("message", message)?;
                }
            }
            ApiResponse::Failure { message, errors } => {
                map.serialize_entry("success", &false)?;
                map.serialize_entry("message", message)?;
                if !errors.is_empty() {
                    map.serialize_entry("errors", errors)?;
                }
            }
        }
        map.end()
    }
}

#[derive(Deserialize)]
struct RawEnvelope<T> {
    success: bool,
    data: Option<T>,
    message: Option<String>,
    #[serde(default)]
    errors: Vec<String>,
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for ApiResponse<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawEnvelope::<T>::deserialize(deserializer)?;
        if raw.success {
            let data = raw
                .data
                .ok_or_else(|| serde::de::Error::missing_field("data"))?;
            Ok(ApiResponse::Success {
                data,
                message: raw.message,
            })
        } else {
            let message = raw
                .message
                .ok_or_else(|| serde::de::Error::missing_field("message"))?;
            Ok(ApiResponse::Failure {
                message,
                errors: raw.errors,
            })
        }
    }
}
