//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading comparator
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{ComparatorConfig, ComparatorFile, ExportConfig};

/// The smallest column width documents can be wrapped to.
const MIN_LINE_WIDTH: usize = 20;

/// Loads and provides access to comparator configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── comparator.yaml  # Metadata and server settings
/// └── export.yaml      # Document layout, disclaimer, share link
/// ```
///
/// # Example
///
/// ```no_run
/// use settlement_comparator::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Loaded: {}", loader.metadata().name);
/// println!("Disclaimer: {}", loader.export().disclaimer);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ComparatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or out-of-range values (`ConfigParseError`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use settlement_comparator::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), settlement_comparator::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let comparator_path = path.join("comparator.yaml");
        let comparator = Self::load_yaml::<ComparatorFile>(&comparator_path)?;

        let export_path = path.join("export.yaml");
        let export = Self::load_yaml::<ExportConfig>(&export_path)?;
        Self::check_export(&export, &export_path)?;

        let config = ComparatorConfig::new(comparator.comparator, comparator.server, export);

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: ComparatorConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn check_export(export: &ExportConfig, path: &Path) -> EngineResult<()> {
        let invalid = |message: String| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message,
        };

        if export.document.lines_per_page == 0 {
            return Err(invalid("document.lines_per_page must be positive".to_string()));
        }
        if export.document.line_width < MIN_LINE_WIDTH {
            return Err(invalid(format!(
                "document.line_width must be at least {}",
                MIN_LINE_WIDTH
            )));
        }
        if export.share.phone_number.is_empty()
            || !export.share.phone_number.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid("share.phone_number must contain only digits".to_string()));
        }

        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &ComparatorConfig {
        &self.config
    }

    /// Returns a mutable reference to the underlying configuration.
    pub fn config_mut(&mut self) -> &mut ComparatorConfig {
        &mut self.config
    }

    /// Returns the deployment metadata.
    pub fn metadata(&self) -> &super::ComparatorMetadata {
        self.config.metadata()
    }

    /// Returns the export settings.
    pub fn export(&self) -> &ExportConfig {
        self.config.export()
    }
}
