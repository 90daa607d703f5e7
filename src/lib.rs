//! Unionname - readable names for the alternatives of a discriminated union
//!
//! # Overview
//!
//! A union such as `OneOf<int?, List<string>>` exposes each alternative
//! through positional members (`IsT0`, `AsT1`). Unionname derives the names a
//! source generator needs to emit friendlier ones (`IsNullableInt`,
//! `AsListOfString`), together with the declaration syntax, a per-union hint
//! name and the namespaces to import.
//!
//! # Quick Start
//!
//! ```
//! use unionname::signature::SignatureOptions;
//! use unionname::union::UnionSignature;
//!
//! let union = UnionSignature::parse(
//!     "OneOf<System.Collections.Generic.Dictionary<string, int>, string?>",
//!     &SignatureOptions::default(),
//! )
//! .unwrap();
//!
//! let names: Vec<_> = union
//!     .alternatives()
//!     .iter()
//!     .map(|alternative| alternative.readable_name())
//!     .collect();
//! assert_eq!(names, ["DictionaryOfString_Int", "String"]);
//! assert_eq!(
//!     union.alternatives().system_namespaces(),
//!     ["System.Collections.Generic"]
//! );
//! ```
//!
//! # Hosts
//!
//! The engine works on [`TypeDescriptor`] trees, built from anything that
//! implements [`TypeDescription`]. The textual [`signature`] parser is one
//! such host; a compiler's symbol table is another.

// Error rendering utilities
pub mod error_renderer;
pub use error_renderer::{CharSet, RenderConfig, render_error, render_error_to};

pub use unionname_core::{Diagnostic, Error, RelatedInfo, Severity};
pub use unionname_core::{member, signature, union};

pub use unionname_core::types::{
    self, TyFlags, TyKind, TypeDescription, TypeDescriptor, aliases, desc,
};
