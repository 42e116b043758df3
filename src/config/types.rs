//! Configuration types for the Settlement Comparator.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

/// Metadata about the comparator deployment.
#[derive(Debug, Clone, Deserialize)]
pub struct ComparatorMetadata {
    /// The human-readable name of the tool.
    pub name: String,
    /// The version of the rule set.
    pub version: String,
    /// The display locale (e.g., "pt-BR").
    pub locale: String,
    /// The ISO currency code (e.g., "BRL").
    pub currency: String,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// The interface to bind.
    pub host: String,
    /// The TCP port to bind.
    pub port: u16,
}

impl ServerConfig {
    /// Returns the `host:port` bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Structure of comparator.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct ComparatorFile {
    /// Deployment metadata.
    pub comparator: ComparatorMetadata,
    /// Server settings.
    pub server: ServerConfig,
}

/// Layout settings for exported documents.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    /// Document title.
    pub title: String,
    /// Line printed under the title.
    pub subtitle: String,
    /// Line printed at the bottom of every page.
    pub footer: String,
    /// Maximum body lines per page.
    pub lines_per_page: usize,
    /// Column width used for wrapping long text.
    pub line_width: usize,
}

/// Settings for the share link.
#[derive(Debug, Clone, Deserialize)]
pub struct ShareConfig {
    /// Base URL of the messaging deep link (e.g., "https://wa.me").
    pub base_url: String,
    /// Destination phone number in international format, digits only.
    pub phone_number: String,
}

/// Structure of export.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Document layout.
    pub document: DocumentConfig,
    /// The legal disclaimer rendered on every export.
    pub disclaimer: String,
    /// Share link settings.
    pub share: ShareConfig,
}

/// The complete comparator configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct ComparatorConfig {
    metadata: ComparatorMetadata,
    server: ServerConfig,
    export: ExportConfig,
}

impl ComparatorConfig {
    /// Creates a new ComparatorConfig from its component parts.
    pub fn new(metadata: ComparatorMetadata, server: ServerConfig, export: ExportConfig) -> Self {
        Self {
            metadata,
            server,
            export,
        }
    }

    /// Returns the deployment metadata.
    pub fn metadata(&self) -> &ComparatorMetadata {
        &self.metadata
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Returns a mutable reference to the server settings.
    pub fn server_mut(&mut self) -> &mut ServerConfig {
        &mut self.server
    }

    /// Returns the export settings.
    pub fn export(&self) -> &ExportConfig {
        &self.export
    }
}
