//! Configuration loading and management for the Settlement Comparator.
//!
//! This module loads deployment settings from YAML files: metadata, the HTTP
//! bind address, document layout, the legal disclaimer, and the share link
//! destination. The calculation rules themselves are fixed and not
//! configurable.
//!
//! # Example
//!
//! ```no_run
//! use settlement_comparator::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Currency: {}", config.metadata().currency);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ComparatorConfig, ComparatorFile, ComparatorMetadata, DocumentConfig, ExportConfig,
    ServerConfig, ShareConfig,
};
