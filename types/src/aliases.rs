//! Keyword aliases for the built-in scalar types.
//!
//! Two read-only tables, built on first use and never written afterwards:
//! one keyed by qualified name (including the nullable-suffixed forms), one
//! keyed by simple name.

use hashbrown::HashMap;
use once_cell::sync::Lazy;

/// The namespace root whose types are rendered without qualification.
pub const SYSTEM_ROOT: &str = "System";

/// `(simple name, keyword, is value type)` for every aliased scalar.
const SCALARS: &[(&str, &str, bool)] = &[
    ("Int32", "int", true),
    ("String", "string", false),
    ("Double", "double", true),
    ("Int64", "long", true),
    ("Int16", "short", true),
    ("Boolean", "bool", true),
    ("Object", "object", false),
    ("Decimal", "decimal", true),
    ("Single", "float", true),
    ("Byte", "byte", true),
    ("SByte", "sbyte", true),
    ("UInt16", "ushort", true),
    ("UInt32", "uint", true),
    ("UInt64", "ulong", true),
    ("Char", "char", true),
];

static QUALIFIED_ALIASES: Lazy<HashMap<String, String>> = Lazy::new(|| {
    let mut table = HashMap::with_capacity(SCALARS.len() * 2);
    for &(name, keyword, is_value) in SCALARS {
        table.insert(format!("{SYSTEM_ROOT}.{name}"), keyword.to_string());
        // `object?` is never a nullable value, so it has no suffixed entry.
        if is_value || name == "String" {
            table.insert(format!("{SYSTEM_ROOT}.{name}?"), format!("{keyword}?"));
        }
    }
    table
});

static SIMPLE_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    SCALARS
        .iter()
        .map(|&(name, keyword, _)| (name, keyword))
        .collect()
});

/// Declaration alias of a qualified name.
///
/// Scalars map to their keyword (`System.Int32?` -> `int?`), any other
/// `System.`-rooted name loses its namespace (`System.Collections.Generic.List`
/// -> `List`), and everything else is returned as is.
pub fn qualified_alias(qualified: &str) -> &str {
    if let Some(alias) = QUALIFIED_ALIASES.get(qualified) {
        return alias;
    }
    if is_system_qualified(qualified)
        && let Some(dot) = qualified.rfind('.')
    {
        return &qualified[dot + 1..];
    }
    qualified
}

/// Keyword alias of a simple name (`Int32` -> `int`), or the name itself.
pub fn simple_alias(simple: &str) -> &str {
    SIMPLE_ALIASES.get(simple).copied().unwrap_or(simple)
}

/// Keyword to `(simple name, is value type)`, for hosts that accept keywords.
pub fn keyword_scalar(keyword: &str) -> Option<(&'static str, bool)> {
    SCALARS
        .iter()
        .find(|(_, kw, _)| *kw == keyword)
        .map(|&(name, _, is_value)| (name, is_value))
}

/// Whether a simple name under [`SYSTEM_ROOT`] is one of the value scalars.
pub fn is_value_scalar(simple: &str) -> bool {
    SCALARS
        .iter()
        .any(|&(name, _, is_value)| is_value && name == simple)
}

/// Value types directly under [`SYSTEM_ROOT`] that have no keyword.
pub const SYSTEM_VALUE_TYPES: &[&str] = &["DateTime", "DateTimeOffset", "TimeSpan", "Guid"];

/// Whether `System.<simple>` is a value type: a value scalar or one of
/// [`SYSTEM_VALUE_TYPES`].
pub fn is_system_value_type(simple: &str) -> bool {
    is_value_scalar(simple) || SYSTEM_VALUE_TYPES.contains(&simple)
}

pub(crate) fn is_system_qualified(qualified: &str) -> bool {
    qualified
        .strip_prefix(SYSTEM_ROOT)
        .is_some_and(|rest| rest.starts_with('.'))
}
