pub mod constants;
pub mod format;

pub use format::*;
