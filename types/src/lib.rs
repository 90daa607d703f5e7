//! Naming engine for union alternatives.
//!
//! Derives, from the type signature of each alternative stored in a union,
//! the names a code generator needs: a readable token for member names
//! (`IsListOfInt`), the declaration syntax (`List<int>`), a per-instantiation
//! hint name, and the namespaces the declaration depends on.
//!
//! # Example
//!
//! ```
//! use unionname_types::desc;
//!
//! let ty = desc!(Dictionary[Str, Int?]);
//! assert_eq!(ty.readable_name(), "DictionaryOfString_NullableInt");
//! assert_eq!(ty.fully_qualified_name(), "Dictionary<string, int?>");
//! assert!(ty.system_namespaces().contains("System.Collections.Generic"));
//! ```

pub mod aliases;
pub mod core;
pub mod macros;

pub use self::core::{
    HASH_MULTIPLIER, HASH_SEED, Ident, TyFlags, TyKind, TypeDescription, TypeDescriptor,
    combine_hash, is_default_element_name,
};
