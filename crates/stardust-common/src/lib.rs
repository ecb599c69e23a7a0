pub mod errors;
pub mod types;

pub use errors::{ConfigError, StardustError};
pub use types::Rgb;

pub type Result<T> = std::result::Result<T, StardustError>;
