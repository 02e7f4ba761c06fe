//! Docshelf Core — error taxonomy, configuration, document record.

pub mod config;
pub mod error;
pub mod types;

pub use config::DocshelfConfig;
pub use error::{Error, Result};
pub use types::DocumentRecord;
