//! Command-line argument definitions for the DXL formatter.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the input and output, switch between
//! formatting and checking, and control configuration and logging.

use clap::Parser;

/// Command-line arguments for the DXL formatter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input DXL file, or `-` for standard input
    #[arg(help = "Path to the input file, or - for stdin")]
    pub input: String,

    /// Path to write the formatted file to; standard output when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Only check that the input is already formatted
    #[arg(long, conflicts_with = "output")]
    pub check: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
