//! Descriptor construction macro for tests and examples.
//!
//! # Example
//!
//! ```
//! use unionname_types::desc;
//!
//! let int = desc!(Int);
//! let list = desc!(List[Int]);
//! let map = desc!(Dictionary[Str, Double?]);
//! let tuple = desc!((Int?, Str, Char?));
//! let record = desc!((Id: Int?, Name: Str));
//!
//! assert_eq!(list.readable_name(), "ListOfInt");
//! assert_eq!(map.readable_name(), "DictionaryOfString_NullableDouble");
//! assert_eq!(record.fully_qualified_name(), "(int? Id, string Name)");
//! # let _ = (int, tuple);
//! ```

use crate::aliases::{SYSTEM_ROOT, is_system_value_type};
use crate::core::TypeDescriptor;

/// Macro for constructing descriptors with a concise syntax.
///
/// # Syntax
///
/// | Pattern | Meaning |
/// |---------|---------|
/// | `Int`, `Str`, `Bool`, `Char`, `Double`, `Long`, ... | Built-in scalars |
/// | `Int32`, `DateTime`, `Guid` | `System` types by simple name |
/// | `CustomType` | A type outside `System`, qualified by its own name |
/// | `T?` | Nullable value (value types) or nullable reference |
/// | `List[T]`, `Dictionary[K, V]` | Generic types |
/// | `(T1, T2)` | Unlabeled value tuple |
/// | `(a: T1, b: T2)` | Labeled value tuple |
#[macro_export]
macro_rules! desc {
    // === Generic types ===

    (@ty $name:ident [$($args:tt)*] ?) => {
        $crate::macros::generic(stringify!($name), $crate::desc!(@list [] [] $($args)*), true)
    };
    (@ty $name:ident [$($args:tt)*]) => {
        $crate::macros::generic(stringify!($name), $crate::desc!(@list [] [] $($args)*), false)
    };

    // === Tuples ===

    (@ty ($($elems:tt)*) ?) => {
        $crate::macros::tuple($crate::desc!(@list [] [] $($elems)*), true)
    };
    (@ty ($($elems:tt)*)) => {
        $crate::macros::tuple($crate::desc!(@list [] [] $($elems)*), false)
    };

    // === Leaves ===

    (@ty $name:ident ?) => {
        $crate::macros::leaf(stringify!($name), true)
    };
    (@ty $name:ident) => {
        $crate::macros::leaf(stringify!($name), false)
    };

    // === Comma-separated lists ===
    // @list [done] [current] remaining

    (@list [$($done:expr,)*] []) => {
        ::std::vec![$($done),*]
    };
    (@list [$($done:expr,)*] [$($cur:tt)+]) => {
        ::std::vec![$($done,)* $crate::desc!(@elem $($cur)+)]
    };
    (@list [$($done:expr,)*] [$($cur:tt)+] , $($rest:tt)*) => {
        $crate::desc!(@list [$($done,)* $crate::desc!(@elem $($cur)+),] [] $($rest)*)
    };
    (@list [$($done:expr,)*] [$($cur:tt)*] $tok:tt $($rest:tt)*) => {
        $crate::desc!(@list [$($done,)*] [$($cur)* $tok] $($rest)*)
    };

    // === List elements, optionally labeled ===

    (@elem $label:ident : $($ty:tt)+) => {
        $crate::desc!(@ty $($ty)+).with_field_name(stringify!($label))
    };
    (@elem $($ty:tt)+) => {
        $crate::desc!(@ty $($ty)+)
    };

    // === Entry point ===

    ($($ty:tt)+) => {
        $crate::desc!(@ty $($ty)+)
    };
}

/// Shorthand scalar names accepted by [`desc!`], mapped to their simple names.
const SHORTHANDS: &[(&str, &str)] = &[
    ("Int", "Int32"),
    ("Str", "String"),
    ("Bool", "Boolean"),
    ("Long", "Int64"),
    ("Short", "Int16"),
    ("Float", "Single"),
];

const SYSTEM_REFERENCE_TYPES: &[&str] = &["String", "Object", "Exception", "Uri"];
const COLLECTIONS: &[&str] = &[
    "List",
    "Dictionary",
    "HashSet",
    "IEnumerable",
    "IReadOnlyList",
    "IReadOnlyDictionary",
];

#[doc(hidden)]
pub fn leaf(name: &str, nullable: bool) -> TypeDescriptor {
    let name = SHORTHANDS
        .iter()
        .find(|(short, _)| *short == name)
        .map_or(name, |&(_, simple)| simple);

    let is_value = is_system_value_type(name);
    let qualified = if is_value || SYSTEM_REFERENCE_TYPES.contains(&name) {
        format!("{SYSTEM_ROOT}.{name}")
    } else {
        name.to_string()
    };

    let node = TypeDescriptor::scalar(name, qualified);
    match (nullable, is_value) {
        (false, _) => node,
        (true, true) => TypeDescriptor::nullable_value(node),
        (true, false) => node.with_nullable_reference(),
    }
}

#[doc(hidden)]
pub fn generic(name: &str, args: Vec<TypeDescriptor>, nullable: bool) -> TypeDescriptor {
    let qualified = if COLLECTIONS.contains(&name) {
        format!("{SYSTEM_ROOT}.Collections.Generic.{name}")
    } else if name == "Tuple" {
        format!("{SYSTEM_ROOT}.{name}")
    } else {
        name.to_string()
    };
    let node = TypeDescriptor::generic(name, qualified, args);
    if nullable {
        node.with_nullable_reference()
    } else {
        node
    }
}

#[doc(hidden)]
pub fn tuple(elements: Vec<TypeDescriptor>, nullable: bool) -> TypeDescriptor {
    let qualified = format!(
        "({})",
        elements
            .iter()
            .map(|e| e.qualified_name())
            .collect::<Vec<_>>()
            .join(", ")
    );
    let node = TypeDescriptor::tuple(qualified, elements);
    if nullable {
        TypeDescriptor::nullable_value(node)
    } else {
        node
    }
}

#[cfg(test)]
mod tests {
    use crate::core::TyFlags;

    #[test]
    fn test_scalar_shorthands() {
        assert_eq!(desc!(Int).qualified_name(), "System.Int32");
        assert_eq!(desc!(Str).simple_name(), "String");
        assert_eq!(desc!(Guid).qualified_name(), "System.Guid");
        assert_eq!(desc!(CustomType).qualified_name(), "CustomType");
    }

    #[test]
    fn test_nullable_forms() {
        assert!(desc!(Int?).is_nullable_value());
        assert!(desc!(Str?).is_nullable_reference());
        assert!(desc!(List[Int]?).is_nullable_reference());
        assert!(desc!((Int, Str)?).is_nullable_value());
    }

    #[test]
    fn test_nested_lists() {
        let d = desc!(Dictionary[Str, List[Dictionary[Int, Char?]]]);
        assert_eq!(d.children().len(), 2);
        assert_eq!(d.children()[1].children()[0].children().len(), 2);
    }

    #[test]
    fn test_labeled_tuple() {
        let t = desc!((Id: Int?, Name: Str));
        assert_eq!(t.children()[0].field_name(), Some("Id"));
        assert_eq!(t.children()[1].field_name(), Some("Name"));
        assert!(t.flags().contains(TyFlags::LABELED));
        assert_eq!(t.qualified_name(), "(System.Int32?, System.String)");
    }
}
