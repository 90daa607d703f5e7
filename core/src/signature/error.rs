use pest::error::{ErrorVariant, InputLocation};

use super::Span;
use super::parser::Rule;
use crate::api::Diagnostic;

/// Malformed signature text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub span: Span,
    pub code: &'static str,
    pub help: Option<String>,
    /// The complete text that was being parsed.
    pub input: String,
}

pub(crate) const SYNTAX_ERROR: &str = "P001";
pub(crate) const TOO_DEEP: &str = "P002";
pub(crate) const BAD_NULLABLE: &str = "P003";
pub(crate) const INVALID_LABEL: &str = "P004";

impl ParseError {
    pub(crate) fn new(
        code: &'static str,
        message: impl Into<String>,
        span: Span,
        input: &str,
    ) -> Self {
        ParseError {
            message: message.into(),
            span,
            code,
            help: None,
            input: input.to_string(),
        }
    }

    pub(crate) fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic =
            Diagnostic::error(self.message.clone(), self.span.clone()).with_code(self.code);
        match &self.help {
            Some(help) => diagnostic.with_help(help.clone()),
            None => diagnostic,
        }
    }
}

/// Convert a pest error into a [`ParseError`] with human-readable rule names.
pub(crate) fn convert_pest_error(err: pest::error::Error<Rule>, input: &str) -> ParseError {
    let span = match err.location {
        InputLocation::Pos(pos) => Span::new(pos, (pos + 1).min(input.len())),
        InputLocation::Span((start, end)) => Span::new(start, end),
    };
    let message = match &err.variant {
        ErrorVariant::CustomError { message } => message.clone(),
        ErrorVariant::ParsingError { .. } => err
            .clone()
            .renamed_rules(describe_rule)
            .variant
            .message()
            .into_owned(),
    };
    ParseError::new(SYNTAX_ERROR, message, span, input)
}

fn describe_rule(rule: &Rule) -> String {
    match rule {
        Rule::EOI => "end of input",
        Rule::signature => "type",
        Rule::nullable => "`?`",
        Rule::tuple => "tuple",
        Rule::element => "tuple element",
        Rule::label => "element name",
        Rule::named | Rule::path | Rule::ident => "type name",
        Rule::type_args => "`<`",
        other => return format!("{other:?}"),
    }
    .to_string()
}
