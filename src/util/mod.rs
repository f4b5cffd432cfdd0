pub mod date;
mod uid;

pub use date::parse_date;
pub use uid::*;
