use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;
use unionname_types::aliases::{SYSTEM_ROOT, is_system_value_type, keyword_scalar};

use super::error::{
    BAD_NULLABLE, INVALID_LABEL, ParseError, SYNTAX_ERROR, TOO_DEEP, convert_pest_error,
};
use super::{Signature, SignatureOptions, Span};
use crate::api::Error;

#[derive(Parser)]
#[grammar = "signature/signature.pest"]
pub(crate) struct SignatureParser;

/// Default maximum nesting of `<...>` and `(...)` in a signature.
pub const DEFAULT_MAX_DEPTH: usize = 64;

const NULLABLE_PATHS: &[&str] = &["Nullable", "System.Nullable"];

struct ParseContext<'s> {
    source: &'s str,
    options: &'s SignatureOptions,
}

impl ParseContext<'_> {
    fn error(&self, code: &'static str, message: impl Into<String>, span: Span) -> ParseError {
        ParseError::new(code, message, span, self.source)
    }

    fn expect<'i>(
        &self,
        pair: Option<Pair<'i, Rule>>,
        span: &Span,
    ) -> Result<Pair<'i, Rule>, ParseError> {
        pair.ok_or_else(|| self.error(SYNTAX_ERROR, "missing expected pair in rule", span.clone()))
    }

    fn parse_signature(&self, pair: Pair<Rule>) -> Result<Signature, ParseError> {
        let span = Span::from(pair.as_span());
        let mut inner = pair.into_inner();
        let base = self.expect(inner.next(), &span)?;
        let base = match base.as_rule() {
            Rule::tuple => self.parse_tuple(base)?,
            Rule::named => self.parse_named(base)?,
            rule => {
                return Err(self.error(
                    SYNTAX_ERROR,
                    format!("unexpected rule in signature: {rule:?}"),
                    span,
                ));
            }
        };
        match inner.next() {
            Some(mark) => self.apply_nullable(base, span, Span::from(mark.as_span())),
            None => Ok(base),
        }
    }

    /// `T?`: a value type becomes `Nullable<T>`, anything else is annotated.
    fn apply_nullable(
        &self,
        base: Signature,
        span: Span,
        mark: Span,
    ) -> Result<Signature, ParseError> {
        if base.annotated {
            return Err(self
                .error(BAD_NULLABLE, "type is already nullable", mark)
                .with_help("remove the extra `?`"));
        }
        if base.value {
            Ok(base.into_nullable_value(span))
        } else {
            Ok(Signature {
                annotated: true,
                span,
                ..base
            })
        }
    }

    fn parse_named(&self, pair: Pair<Rule>) -> Result<Signature, ParseError> {
        let span = Span::from(pair.as_span());
        let mut inner = pair.into_inner();
        let path = self.expect(inner.next(), &span)?.as_str();
        let args = match inner.next() {
            Some(type_args) => type_args
                .into_inner()
                .map(|arg| self.parse_signature(arg))
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        let keyword = keyword_scalar(path);
        let type_param = self.options.type_params.contains(path);
        if (keyword.is_some() || type_param) && !args.is_empty() {
            return Err(self.error(
                SYNTAX_ERROR,
                format!("`{path}` takes no type arguments"),
                span,
            ));
        }

        if type_param {
            return Ok(Signature {
                name: path.to_string(),
                qualified: path.to_string(),
                named: false,
                value: self.options.value_types.contains(path),
                annotated: false,
                tuple: false,
                args,
                labels: Vec::new(),
                span,
            });
        }
        if let Some((simple, value)) = keyword {
            let qualified = format!("{SYSTEM_ROOT}.{simple}");
            return Ok(nominal(simple, qualified, value, args, span));
        }
        if NULLABLE_PATHS.contains(&path) {
            return self.parse_nullable_generic(args, span);
        }

        let name = path.rsplit('.').next().unwrap_or(path);
        let value = self.is_value_path(path);
        Ok(nominal(name, path.to_string(), value, args, span))
    }

    /// `System.Nullable<T>`, spelled out.
    fn parse_nullable_generic(
        &self,
        args: Vec<Signature>,
        span: Span,
    ) -> Result<Signature, ParseError> {
        let mut args = args.into_iter();
        let (Some(inner), None) = (args.next(), args.next()) else {
            return Err(self.error(
                BAD_NULLABLE,
                "`Nullable` takes exactly one type argument",
                span,
            ));
        };
        if !inner.value || inner.annotated {
            let message = format!(
                "`Nullable<T>` requires a non-nullable value type, found `{}`",
                &self.source[inner.span.0.clone()]
            );
            return Err(self
                .error(BAD_NULLABLE, message, inner.span.clone())
                .with_help("use `?` on reference types instead"));
        }
        Ok(inner.into_nullable_value(span))
    }

    fn parse_tuple(&self, pair: Pair<Rule>) -> Result<Signature, ParseError> {
        let span = Span::from(pair.as_span());
        let mut args = Vec::new();
        let mut labels: Vec<String> = Vec::new();

        for (i, element) in pair.into_inner().enumerate() {
            let element_span = Span::from(element.as_span());
            let mut inner = element.into_inner();
            let ty = self.parse_signature(self.expect(inner.next(), &element_span)?)?;
            let label = match inner.next() {
                Some(label) => self.check_label(&labels, i, label)?,
                None => format!("Item{}", i + 1),
            };
            args.push(ty);
            labels.push(label);
        }

        let qualified = format!(
            "({})",
            args.iter()
                .map(|arg| arg.qualified.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(Signature {
            name: "ValueTuple".to_string(),
            qualified,
            named: true,
            value: true,
            annotated: false,
            tuple: true,
            args,
            labels,
            span,
        })
    }

    /// Element names are unique, and `Item<n>` may only name element `n`.
    fn check_label(
        &self,
        seen: &[String],
        index: usize,
        label: Pair<Rule>,
    ) -> Result<String, ParseError> {
        let text = label.as_str();
        let span = Span::from(label.as_span());
        if seen.iter().any(|seen| seen == text) {
            let message = format!("tuple element name `{text}` is a duplicate");
            return Err(self.error(INVALID_LABEL, message, span));
        }
        if let Some(position) = item_position(text)
            && position != index + 1
        {
            let message =
                format!("tuple element name `{text}` is only allowed at position {position}");
            return Err(self
                .error(INVALID_LABEL, message, span)
                .with_help("remove the name or use a different one"));
        }
        Ok(text.to_string())
    }

    fn is_value_path(&self, path: &str) -> bool {
        self.options.value_types.contains(path)
            || path
                .strip_prefix(SYSTEM_ROOT)
                .and_then(|rest| rest.strip_prefix('.'))
                .is_some_and(is_system_value_type)
    }
}

fn nominal(
    name: &str,
    qualified: String,
    value: bool,
    args: Vec<Signature>,
    span: Span,
) -> Signature {
    Signature {
        name: name.to_string(),
        qualified,
        named: true,
        value,
        annotated: false,
        tuple: false,
        args,
        labels: Vec::new(),
        span,
    }
}

/// The position named by an `Item<n>` label, if the label has that form.
fn item_position(label: &str) -> Option<usize> {
    let digits = label.strip_prefix("Item")?;
    if digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Reject input nested deeper than `max_depth` before handing it to pest,
/// whose recursive descent would otherwise exhaust the stack.
fn check_depth(source: &str, max_depth: usize) -> Result<(), ParseError> {
    let mut depth = 0usize;
    for (pos, c) in source.char_indices() {
        match c {
            '<' | '(' => {
                depth += 1;
                if depth > max_depth {
                    return Err(ParseError::new(
                        TOO_DEEP,
                        format!("signature nesting depth exceeds maximum of {max_depth} levels"),
                        Span::new(pos, pos + 1),
                        source,
                    ));
                }
            }
            '>' | ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

/// Parse a single type signature such as `Dictionary<string, int?>`.
pub fn parse_signature(source: &str, options: &SignatureOptions) -> Result<Signature, Error> {
    check_depth(source, options.max_depth)?;
    let mut pairs = SignatureParser::parse(Rule::main, source).map_err(|e| {
        tracing::debug!("Pest parser failed with: {:?}", e);
        convert_pest_error(e, source)
    })?;

    let context = ParseContext { source, options };
    let whole = Span::new(0, source.len());
    let main = context.expect(pairs.next(), &whole)?;
    let signature = context.expect(main.into_inner().next(), &whole)?;
    Ok(context.parse_signature(signature)?)
}
