pub mod types;
pub mod safety;
pub mod config;
pub mod error;

pub use types::*;
pub use safety::*;
pub use config::Config;
pub use error::LeadSignalError;
