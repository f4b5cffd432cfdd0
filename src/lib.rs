pub mod app;
pub mod config;
pub mod contacts;
pub mod error;
pub mod logging;
pub mod notify;
pub mod response;
pub mod storage;
pub mod util;

pub use app::ContactsModule;
pub use error::{ContactsError, Result};
pub use response::ApiResponse;

pub const NAME: &str = "contact-book";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
