//! Error rendering using ariadne
//!
//! Diagnostics are drawn under the signature text they point into, with
//! their codes, related locations and help lines.

use crate::{Diagnostic, Error, Severity};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig<'a> {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The filename to display in error messages.
    /// Defaults to "<unknown>" if not provided.
    pub filename: Option<&'a str>,
    /// The character set to use for rendering.
    /// Defaults to Unicode for rich visual output.
    pub charset: CharSet,
}

impl Default for RenderConfig<'_> {
    fn default() -> Self {
        RenderConfig::default()
    }
}

impl RenderConfig<'_> {
    const fn default() -> Self {
        Self {
            color: true,
            filename: None,
            charset: CharSet::Unicode,
        }
    }
}

/// Render an error to stderr using the default config.
///
/// # Example
/// ```no_run
/// use unionname::render_error;
/// use unionname::signature::{SignatureOptions, parse_signature};
///
/// if let Err(e) = parse_signature("List<int", &SignatureOptions::default()) {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &Error) {
    render_error_to(error, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
///
/// This is the main rendering function. Use this when you need control over
/// the output destination or rendering options.
///
/// # Example
/// ```
/// use unionname::{RenderConfig, render_error_to};
/// use unionname::signature::{SignatureOptions, parse_signature};
///
/// let e = parse_signature("Nullable<string>", &SignatureOptions::default()).unwrap_err();
/// let mut buf = Vec::new();
/// let config = RenderConfig { color: false, ..Default::default() };
/// render_error_to(&e, &mut buf, &config).unwrap();
/// assert!(String::from_utf8_lossy(&buf).contains("[P003] Error"));
/// ```
pub fn render_error_to(
    error: &Error,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let filename = config
        .filename
        .or_else(|| error.filename())
        .unwrap_or("<unknown>");

    match error {
        Error::Compilation {
            diagnostics,
            source,
            ..
        } => render_diagnostics(source, diagnostics, writer, config, filename),
        Error::Api(msg) => {
            writeln!(writer, "error: {}", msg)
        }
    }
}

fn render_diagnostics(
    source: &str,
    diagnostics: &[Diagnostic],
    writer: &mut dyn Write,
    config: &RenderConfig,
    filename: &str,
) -> std::io::Result<()> {
    for diag in diagnostics {
        let mut colors = ColorGenerator::new();
        colors.next(); // Skip the first color.

        let kind = match diag.severity {
            Severity::Error => ReportKind::Error,
            Severity::Warning => ReportKind::Warning,
            Severity::Info => ReportKind::Advice,
        };

        let ariadne_charset = match config.charset {
            CharSet::Unicode => ariadne::CharSet::Unicode,
            CharSet::Ascii => ariadne::CharSet::Ascii,
        };
        let ariadne_config = ariadne::Config::default()
            .with_color(config.color)
            .with_char_set(ariadne_charset);

        let mut report = Report::build(kind, (filename, diag.span.0.clone()))
            .with_message(&diag.message)
            .with_config(ariadne_config);

        // Add error code if present
        if let Some(code) = &diag.code {
            report = report.with_code(code);
        }

        // Primary label with the main error span
        let color = colors.next();
        report = report.with_label(
            Label::new((filename, diag.span.0.clone()))
                .with_message(&diag.message)
                .with_color(color),
        );

        // Related info as secondary labels
        for related in &diag.related {
            let color = colors.next();
            report = report.with_label(
                Label::new((filename, related.span.0.clone()))
                    .with_message(&related.message)
                    .with_color(color),
            );
        }

        // Help text as notes
        for help_msg in &diag.help {
            report = report.with_help(help_msg);
        }

        // Reborrow so the writer is not moved into the first report.
        report
            .finish()
            .write((filename, Source::from(source)), &mut *writer)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::{Expect, expect};
    use unionname_core::signature::SignatureOptions;
    use unionname_core::union::UnionSignature;

    const UNICODE_CONFIG: RenderConfig = RenderConfig {
        color: false,
        filename: Some("test.txt"),
        charset: CharSet::Unicode,
    };

    const ASCII_CONFIG: RenderConfig = RenderConfig {
        color: false,
        filename: Some("test.txt"),
        charset: CharSet::Ascii,
    };

    fn render_error_string(source: &str, config: &RenderConfig) -> String {
        match UnionSignature::parse(source, &SignatureOptions::default()) {
            Err(e) => render_to_string(&e, config),
            Ok(_) => panic!("Expected an error for source: {source}"),
        }
    }

    fn render_to_string(error: &Error, config: &RenderConfig) -> String {
        let mut buf = Vec::new();
        render_error_to(error, &mut buf, config).unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn check_error(source: &str, config: &RenderConfig, expected: Expect) {
        let output = render_error_string(source, config);
        expected.assert_eq(&output);
    }

    #[test]
    fn test_not_a_union_unicode() {
        check_error(
            "List<int>",
            &UNICODE_CONFIG,
            expect![[r#"
                [U001] Error: expected a `OneOf<...>` union, found `List`
                   ╭─[ test.txt:1:1 ]
                   │
                 1 │ List<int>
                   │ ────┬────  
                   │     ╰────── expected a `OneOf<...>` union, found `List`
                   │ 
                   │ Help: list the alternatives as `OneOf<T0, T1, ...>`
                ───╯
            "#]],
        );
    }

    #[test]
    fn test_not_a_union_ascii() {
        check_error(
            "List<int>",
            &ASCII_CONFIG,
            expect![[r#"
                [U001] Error: expected a `OneOf<...>` union, found `List`
                   ,-[ test.txt:1:1 ]
                   |
                 1 | List<int>
                   | ^^^^|^^^^  
                   |     `------ expected a `OneOf<...>` union, found `List`
                   | 
                   | Help: list the alternatives as `OneOf<T0, T1, ...>`
                ---'
            "#]],
        );
    }

    #[test]
    fn test_nullable_reference_argument_unicode() {
        check_error(
            "Nullable<string>",
            &UNICODE_CONFIG,
            expect![[r#"
                [P003] Error: `Nullable<T>` requires a non-nullable value type, found `string`
                   ╭─[ test.txt:1:10 ]
                   │
                 1 │ Nullable<string>
                   │          ───┬──  
                   │             ╰──── `Nullable<T>` requires a non-nullable value type, found `string`
                   │ 
                   │ Help: use `?` on reference types instead
                ───╯
            "#]],
        );
    }

    #[test]
    fn test_syntax_error_has_code() {
        let output = render_error_string("OneOf<int, >", &UNICODE_CONFIG);
        assert!(output.starts_with("[P001] Error:"), "{output}");
        assert!(output.contains("test.txt:1:"), "{output}");
    }

    #[test]
    fn test_collision_warning_shows_both_alternatives() {
        let union =
            UnionSignature::parse("OneOf<string, string?>", &SignatureOptions::default()).unwrap();
        let warning = union.collision_warnings().unwrap();
        let output = render_to_string(&warning, &UNICODE_CONFIG);
        assert!(output.starts_with("[U002] Warning:"), "{output}");
        assert!(output.contains("first used here"), "{output}");
        assert!(
            output.contains("Help: only the first alternative"),
            "{output}"
        );
    }

    #[test]
    fn test_filename_falls_back_to_error() {
        let error = UnionSignature::parse("int", &SignatureOptions::default())
            .unwrap_err()
            .with_filename("unions.txt");
        let config = RenderConfig {
            color: false,
            ..Default::default()
        };
        assert!(render_to_string(&error, &config).contains("unions.txt:1:1"));
    }

    #[test]
    fn test_api_error() {
        let error = Error::Api("`Foo` is not a positional member".to_string());
        assert_eq!(
            render_to_string(&error, &UNICODE_CONFIG),
            "error: `Foo` is not a positional member\n"
        );
    }

    #[test]
    fn test_charset_default_is_unicode() {
        assert_eq!(CharSet::default(), CharSet::Unicode);
    }

    #[test]
    fn test_render_config_default_charset() {
        let config = RenderConfig::default();
        assert_eq!(config.charset, CharSet::Unicode);
    }
}
