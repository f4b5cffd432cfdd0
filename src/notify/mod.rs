mod snack;

pub use snack::*;
