//! CLI logic for the DXL formatter.
//!
//! Reads a DXL document, formats it into canonical layout and writes the
//! result, or with `--check` only verifies that the input is canonical.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Read, Write},
};

use log::info;

use dxl::{DxlError, Formatter};

/// Input path naming standard input.
const STDIN_PATH: &str = "-";

/// Run the DXL CLI application
///
/// # Errors
///
/// Returns `DxlError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Input that is not canonical when checking
pub fn run(args: &Args) -> Result<(), DxlError> {
    info!(
        input_path = args.input,
        output_path:? = args.output,
        check = args.check;
        "Processing document"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let (file_name, source) = read_input(&args.input)?;

    let formatter = Formatter::new(app_config);
    let formatted = formatter.format(&file_name, &source)?;

    if args.check {
        if formatted != source {
            return Err(DxlError::NotCanonical { path: file_name });
        }
        info!(file_name; "Document is canonical");
        return Ok(());
    }

    match &args.output {
        Some(path) => {
            fs::write(path, &formatted)?;
            info!(output_file = path; "Formatted document written");
        }
        None => io::stdout().lock().write_all(formatted.as_bytes())?,
    }

    Ok(())
}

/// Returns the display name and content of the input.
fn read_input(path: &str) -> Result<(String, String), DxlError> {
    if path == STDIN_PATH {
        let mut source = String::new();
        io::stdin().lock().read_to_string(&mut source)?;
        return Ok(("<stdin>".to_string(), source));
    }

    Ok((path.to_string(), fs::read_to_string(path)?))
}
