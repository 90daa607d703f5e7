//! Public API surface shared by every entry point.

pub mod error;

pub use error::{Diagnostic, Error, RelatedInfo, Severity};
