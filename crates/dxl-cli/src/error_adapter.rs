//! miette rendering for [`DxlError`].
//!
//! A parse failure carries exactly one diagnostic and the text it was found
//! in, so it renders as an annotated snippet. Every other failure renders as
//! a one-line message with a `dxl::*` code.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceCode, SourceSpan};

use dxl::DxlError;
use dxl_parser::{Span, error::Diagnostic};

/// Borrowed view of a [`DxlError`] that miette can render.
pub struct ErrorReport<'a> {
    err: &'a DxlError,
}

impl<'a> ErrorReport<'a> {
    pub fn new(err: &'a DxlError) -> Self {
        Self { err }
    }

    /// The parse diagnostic and the document it points into.
    fn parse_diagnostic(&self) -> Option<(&'a Diagnostic, &'a str)> {
        match self.err {
            DxlError::Parse { err, src } => Some((err.diagnostic(), src.as_str())),
            _ => None,
        }
    }
}

impl fmt::Debug for ErrorReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ErrorReport").field(self.err).finish()
    }
}

impl fmt::Display for ErrorReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parse_diagnostic() {
            Some((diag, _)) => f.write_str(diag.message()),
            None => fmt::Display::fmt(self.err, f),
        }
    }
}

impl std::error::Error for ErrorReport<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.err {
            DxlError::Parse { .. } => None,
            err => std::error::Error::source(err),
        }
    }
}

impl MietteDiagnostic for ErrorReport<'_> {
    fn code<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        let code = match self.err {
            DxlError::Parse { err, .. } => {
                return err
                    .diagnostic()
                    .code()
                    .map(|code| Box::new(code) as Box<dyn fmt::Display>);
            }
            DxlError::Io(_) => "dxl::io",
            DxlError::Config(_) => "dxl::config",
            DxlError::NotCanonical { .. } => "dxl::check",
        };
        Some(Box::new(code))
    }

    fn help<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        match self.err {
            DxlError::Parse { err, .. } => err
                .diagnostic()
                .help()
                .map(|help| Box::new(help) as Box<dyn fmt::Display>),
            DxlError::NotCanonical { .. } => Some(Box::new("run without --check to format it")),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        match self.err {
            DxlError::Parse { src, .. } => Some(src as &dyn SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let (diag, _) = self.parse_diagnostic()?;
        if diag.labels().is_empty() {
            return None;
        }

        Some(Box::new(diag.labels().iter().map(|label| {
            let span = source_span(label.span());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

fn source_span(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

#[cfg(test)]
mod tests {
    use dxl_parser::error::{ErrorCode, ParseError};

    use super::*;

    fn parse_error(diag: Diagnostic, src: &str) -> DxlError {
        DxlError::new_parse_error(ParseError::from(diag), src)
    }

    #[test]
    fn test_parse_error_renders_against_source() {
        let err = parse_error(
            Diagnostic::error("Expected ';' at t.dxl (1,6); found end of input.")
                .with_code(ErrorCode::E101)
                .with_label(Span::new(5..5), "input ends here"),
            "alice",
        );
        let report = ErrorReport::new(&err);

        assert_eq!(
            report.to_string(),
            "Expected ';' at t.dxl (1,6); found end of input."
        );
        assert_eq!(
            report.code().map(|code| code.to_string()),
            Some(ErrorCode::E101.to_string())
        );
        assert!(report.source_code().is_some());
    }

    #[test]
    fn test_check_failure_has_code_and_help() {
        let err = DxlError::NotCanonical {
            path: "people.dxl".to_string(),
        };
        let report = ErrorReport::new(&err);

        assert_eq!(report.to_string(), "people.dxl is not in canonical form");
        assert_eq!(
            report.code().map(|code| code.to_string()).as_deref(),
            Some("dxl::check")
        );
        assert!(report.help().is_some());
        assert!(report.source_code().is_none());
        assert!(report.labels().is_none());
    }

    #[test]
    fn test_primary_and_secondary_labels() {
        let err = parse_error(
            Diagnostic::error("Interval end must follow its start")
                .with_label(Span::new(0..5), "end")
                .with_secondary_label(Span::new(10..15), "start"),
            "some source code",
        );
        let report = ErrorReport::new(&err);

        let labels: Vec<_> = report.labels().unwrap().collect();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].label(), Some("end"));
        assert_eq!(labels[1].label(), Some("start"));
        assert!(labels[0].primary());
        assert!(!labels[1].primary());
    }

    #[test]
    fn test_unlabelled_parse_error() {
        let err = parse_error(Diagnostic::error("bare"), "");
        let report = ErrorReport::new(&err);

        assert!(report.labels().is_none());
        assert!(report.help().is_none());
        assert!(report.code().is_none());
    }

    #[test]
    fn test_graphical_report_shows_code_and_message() {
        let err = parse_error(
            Diagnostic::error("Expected ';' at t.dxl (1,6); found end of input.")
                .with_code(ErrorCode::E101)
                .with_label(Span::new(5..5), "input ends here"),
            "alice",
        );

        let mut rendered = String::new();
        miette::GraphicalReportHandler::new_themed(miette::GraphicalTheme::unicode_nocolor())
            .render_report(&mut rendered, &ErrorReport::new(&err))
            .unwrap();

        assert!(rendered.contains("E101"));
        assert!(rendered.contains("Expected ';'"));
        assert!(rendered.contains("input ends here"));
    }
}
