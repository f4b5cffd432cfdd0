mod cleanup;
pub mod client;
mod models;
mod service;

pub use cleanup::*;
pub use client::*;
pub use models::*;
pub use service::*;
