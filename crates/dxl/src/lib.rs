//! DXL - a language for declaring graph concepts and their connections.
//!
//! Parsing and canonical formatting for DXL documents. Formatting is a
//! parse followed by code generation; canonical text formats to itself.

pub mod codegen;
pub mod config;

mod error;

pub use dxl_core::{ast, origin, time};

pub use error::DxlError;

use log::{debug, info, trace};

use ast::TopLevel;
use config::AppConfig;

/// Builder for parsing and formatting DXL documents.
///
/// # Examples
///
/// ```rust
/// use dxl::{Formatter, config::AppConfig};
///
/// let formatter = Formatter::new(AppConfig::default());
///
/// let formatted = formatter
///     .format("people.dxl", "alice   :Person ;")
///     .expect("Failed to format");
/// assert_eq!(formatted, "alice: Person;\n");
///
/// // Or use default config
/// let formatter = Formatter::default();
/// ```
#[derive(Default)]
pub struct Formatter {
    config: AppConfig,
}

impl Formatter {
    /// Create a new formatter with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse source text into a syntax tree.
    ///
    /// # Arguments
    ///
    /// * `file_name` - Name of the source used in error messages and origins
    /// * `source` - DXL source code as a string
    ///
    /// # Errors
    ///
    /// Returns [`DxlError::Parse`] holding the first syntax error together
    /// with the source.
    pub fn parse(&self, file_name: &str, source: &str) -> Result<TopLevel, DxlError> {
        info!(file_name; "Parsing document");

        let top_level = dxl_parser::parse(file_name, source)
            .map_err(|err| DxlError::new_parse_error(err, source))?;

        debug!(
            aliases = top_level.aliases().len(),
            declarations = top_level.declarations().len();
            "Document parsed successfully"
        );
        trace!(top_level:?; "Parsed document");

        Ok(top_level)
    }

    /// Render a syntax tree as canonical DXL text.
    pub fn generate(&self, top_level: &TopLevel) -> String {
        let indent_unit = self.config.format().indent_unit();
        debug!(indent_unit:?; "Generating document");

        codegen::generate(top_level, &indent_unit)
    }

    /// Parse `source` and render it back in canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`DxlError::Parse`] if the source does not parse.
    pub fn format(&self, file_name: &str, source: &str) -> Result<String, DxlError> {
        let top_level = self.parse(file_name, source)?;
        let formatted = self.generate(&top_level);

        info!(file_name, unchanged = formatted == source; "Document formatted");
        Ok(formatted)
    }

    /// Whether `source` is already in canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`DxlError::Parse`] if the source does not parse.
    pub fn is_canonical(&self, file_name: &str, source: &str) -> Result<bool, DxlError> {
        Ok(self.format(file_name, source)? == source)
    }
}
