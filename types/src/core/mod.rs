//! The descriptor tree and everything computed from it.
//!
//! - [`TypeDescriptor`]: one node, immutable once built
//! - [`TyKind`]: the closed set of node shapes
//! - [`TyFlags`]: whole-tree properties cached at construction
//! - [`TypeDescription`]: what a host must expose for a tree to be built
//!
//! Renderings live in `render.rs`, structural equality and hashing in `eq.rs`.

mod description;
mod eq;
mod flags;
mod kind;
mod render;
mod ty;

pub use description::{TypeDescription, is_default_element_name};
pub use eq::{HASH_MULTIPLIER, HASH_SEED, combine_hash};
pub use flags::TyFlags;
pub use kind::TyKind;
pub use ty::{Ident, TypeDescriptor};
