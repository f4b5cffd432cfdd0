use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContactsError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout error: {0}")]
    Timeout(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("HTTP error: {status} - {message}")]
    Http { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Background task failed: {0}")]
    Task(String),

    #[error("{message}")]
    Service { message: String, errors: Vec<String> },
}

impl ContactsError {
    /// A 404 from either store. Deletes treat this as "already gone".
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContactsError::NotFound(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ContactsError::Network(_) | ContactsError::Timeout(_))
    }
}

impl From<reqwest::Error> for ContactsError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ContactsError::Timeout(e.to_string())
        } else if e.is_connect() {
            ContactsError::Network(format!("Connection failed: {}", e))
        } else if e.status() == Some(reqwest::StatusCode::NOT_FOUND) {
            ContactsError::NotFound(e.url().map(|u| u.to_string()).unwrap_or_default())
        } else if let Some(status) = e.status() {
            ContactsError::Http {
                status: status.as_u16(),
                message: e.to_string(),
            }
        } else {
            ContactsError::Network(e.to_string())
        }
    }
}

impl From<tokio::task::JoinError> for ContactsError {
    fn from(e: tokio::task::JoinError) -> Self {
        ContactsError::Task(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ContactsError>;
