mod client;
mod service;
mod types;

pub use client::*;
pub use service::*;
pub use types::*;
