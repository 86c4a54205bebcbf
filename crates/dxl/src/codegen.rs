//! Code generation back to DXL text.
//!
//! [`generate`] renders a syntax tree in canonical layout through a
//! [`CodeWriter`], which owns indentation and line trimming.

mod generator;
mod writer;

pub use generator::generate;
pub use writer::{CodeWriter, Indented};
