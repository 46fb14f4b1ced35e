pub mod config;
pub mod domain;
pub mod error;
pub mod host;
pub mod orchestrator;
pub mod schema;
pub mod sink;
pub mod ui;
pub mod version;

pub use error::{ReleaseError, Result};
