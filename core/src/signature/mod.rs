//! Textual type signatures.
//!
//! [`Signature`] is a [`TypeDescription`] host parsed from the way a C#
//! declaration spells a type. It answers the same questions a compiler's
//! symbol table would, so descriptor trees built from it match the ones a
//! source generator builds.

mod error;
mod parser;

use core::ops::Range;

use hashbrown::HashSet;
use unionname_types::TypeDescription;

pub use error::ParseError;
pub use parser::{DEFAULT_MAX_DEPTH, parse_signature};

/// Byte range into the signature text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span(start..end)
    }

    pub fn start(&self) -> usize {
        self.0.start
    }

    pub fn end(&self) -> usize {
        self.0.end
    }
}

impl From<pest::Span<'_>> for Span {
    fn from(span: pest::Span<'_>) -> Self {
        Span(span.start()..span.end())
    }
}

/// The union type whose alternatives get generated members.
pub const DEFAULT_UNION_NAME: &str = "OneOf";

/// What the parser cannot tell from the text alone.
#[derive(Debug, Clone)]
pub struct SignatureOptions {
    /// Names (as written) of types declared elsewhere as structs.
    pub value_types: HashSet<String>,
    /// Bare identifiers that are open type parameters rather than types.
    pub type_params: HashSet<String>,
    /// Maximum nesting of `<...>` and `(...)`.
    pub max_depth: usize,
    /// Simple name of the union type.
    pub union_name: String,
}

impl Default for SignatureOptions {
    fn default() -> Self {
        SignatureOptions {
            value_types: HashSet::new(),
            type_params: HashSet::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            union_name: DEFAULT_UNION_NAME.to_string(),
        }
    }
}

impl SignatureOptions {
    pub fn with_value_type(mut self, name: impl Into<String>) -> Self {
        self.value_types.insert(name.into());
        self
    }

    pub fn with_type_param(mut self, name: impl Into<String>) -> Self {
        self.type_params.insert(name.into());
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_union_name(mut self, name: impl Into<String>) -> Self {
        self.union_name = name.into();
        self
    }
}

/// A parsed type signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    name: String,
    qualified: String,
    named: bool,
    value: bool,
    annotated: bool,
    tuple: bool,
    args: Vec<Signature>,
    labels: Vec<String>,
    span: Span,
}

impl Signature {
    /// Where this type was written.
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Type arguments (or tuple elements) as written.
    pub fn arguments(&self) -> &[Signature] {
        &self.args
    }

    /// Element labels of a tuple, defaults included. Empty for non-tuples.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Wrap a value type in `Nullable`, the way compilers model `T?`.
    fn into_nullable_value(self, span: Span) -> Signature {
        Signature {
            name: "Nullable".to_string(),
            qualified: format!("{}?", self.qualified),
            named: true,
            value: true,
            annotated: true,
            tuple: false,
            args: vec![self],
            labels: Vec::new(),
            span,
        }
    }
}

impl TypeDescription for Signature {
    fn name(&self) -> &str {
        &self.name
    }

    fn qualified_name(&self) -> &str {
        &self.qualified
    }

    fn is_named(&self) -> bool {
        self.named
    }

    fn is_value_type(&self) -> bool {
        self.value
    }

    fn is_nullable_annotated(&self) -> bool {
        self.annotated
    }

    fn is_tuple(&self) -> bool {
        self.tuple
    }

    fn type_arguments(&self) -> impl Iterator<Item = &Self> {
        self.args.iter()
    }

    fn tuple_elements(&self) -> impl Iterator<Item = (&str, &Self)> {
        self.labels.iter().map(String::as_str).zip(self.args.iter())
    }
}
