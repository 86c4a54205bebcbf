//! # DXL Parser
//!
//! Scanner and recursive-descent parser for DXL, a small language for
//! declaring graph concepts and the connections between them, annotated with
//! valid and transaction times.
//!
//! ## Usage
//!
//! ```
//! # use dxl_parser::{parse, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//!         alias Person as org.example.Person
//!
//!         alice: Person with
//!           age = 42 valid-as-of |2021-06-01T00:00:00Z|
//!         ;
//!         alice knows bob: Person;
//!     "#;
//!
//!     let top_level = parse("people.dxl", source)?;
//!     assert_eq!(top_level.declarations().len(), 2);
//!     Ok(())
//! }
//! ```

mod cursor;
pub mod error;
mod literals;
mod parser;
mod scanner;
mod span;
mod token_buffer;
pub mod tokens;

pub use scanner::Scanner;
pub use span::Span;

use dxl_core::ast::TopLevel;

use error::ParseError;
use parser::Parser;
use tokens::Token;

/// Parses DXL source text into its syntax tree.
///
/// `file_name` names the source in error messages and node origins.
///
/// # Errors
///
/// Returns a [`ParseError`] holding the single diagnostic of the first
/// grammar violation, including malformed literals found by the scanner.
pub fn parse(file_name: &str, source: &str) -> Result<TopLevel, ParseError> {
    Parser::new(file_name, source)
        .parse_top_level()
        .map_err(ParseError::new)
}

/// Scans `source` into tokens, ending with the end-of-input token.
///
/// Malformed input shows up as error-kind tokens rather than a failure.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Scanner::new(source).collect()
}
