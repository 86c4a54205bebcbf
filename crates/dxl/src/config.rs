//! Configuration types for DXL formatting.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources such as the CLI's TOML configuration file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`FormatConfig`] - Controls the layout of generated DXL text.
//!
//! # Example
//!
//! ```
//! # use dxl::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.format().indent_unit(), "  ");
//! ```

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Formatting configuration section.
    #[serde(default)]
    format: FormatConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given formatting settings.
    pub fn new(format: FormatConfig) -> Self {
        Self { format }
    }

    /// Returns the formatting configuration.
    pub fn format(&self) -> &FormatConfig {
        &self.format
    }
}

/// Layout settings for generated DXL text.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Spaces per indentation level; ignored when `use_tabs` is set.
    indent_width: usize,

    /// Indent with one tab per level instead of spaces.
    use_tabs: bool,
}

impl FormatConfig {
    /// Creates a new [`FormatConfig`].
    ///
    /// # Arguments
    ///
    /// * `indent_width` - Spaces per indentation level.
    /// * `use_tabs` - Indent with tabs instead of spaces.
    pub fn new(indent_width: usize, use_tabs: bool) -> Self {
        Self {
            indent_width,
            use_tabs,
        }
    }

    pub fn indent_width(&self) -> usize {
        self.indent_width
    }

    pub fn use_tabs(&self) -> bool {
        self.use_tabs
    }

    /// The text of one indentation level.
    pub fn indent_unit(&self) -> String {
        if self.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(self.indent_width)
        }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::new(2, false)
    }
}
