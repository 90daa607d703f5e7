//! Signatures, unions and generated member names on top of
//! [`unionname_types`].
//!
//! ```
//! use unionname_core::member::PositionalMember;
//! use unionname_core::signature::SignatureOptions;
//! use unionname_core::union::UnionSignature;
//!
//! let union = UnionSignature::parse(
//!     "OneOf<int?, System.Collections.Generic.List<string>>",
//!     &SignatureOptions::default(),
//! )
//! .unwrap();
//! let alternatives = union.alternatives();
//! assert_eq!(alternatives.get(0).unwrap().readable_name(), "NullableInt");
//!
//! let positional = PositionalMember::parse("IsT1").unwrap();
//! let rewrite = alternatives.rewrite(&positional).unwrap();
//! assert_eq!(rewrite.to_string(), "IsListOfString()");
//! ```

pub mod api;
pub mod member;
pub mod signature;
pub mod union;

pub use api::{Diagnostic, Error, RelatedInfo, Severity};
pub use unionname_types as types;

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize a tracing subscriber for tests at DEBUG level, unless
    /// `RUST_LOG` says otherwise.
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Ignore the error if another test already installed one.
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
