pub mod config;
pub mod error;
pub mod lenient;
pub mod types;
pub mod wire;

pub use config::AdapterConfig;
pub use error::{AdapterError, AdapterResult};
