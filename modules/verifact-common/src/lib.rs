pub mod error;
pub mod types;

pub use error::VerifactError;
pub use types::*;
