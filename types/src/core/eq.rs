//! Structural equality and hashing.
//!
//! Two descriptors are the same generation unit when they render the same
//! readable name and the same label-free declaration, and their children are
//! pairwise the same. Field labels never take part.

use core::hash::{self, Hash, Hasher};
use std::hash::DefaultHasher;

use super::render::Labels;
use super::ty::TypeDescriptor;

pub const HASH_SEED: u64 = 19;
pub const HASH_MULTIPLIER: u64 = 31;

impl TypeDescriptor {
    /// Declaration rendering with every tuple label dropped.
    pub fn unlabeled_name(&self) -> String {
        let mut out = String::new();
        self.write_declaration(&mut out, Labels::Omit);
        out
    }

    /// Hash consistent with `==`: a seed combined with the hashes of the two
    /// renderings and of every child, in order.
    ///
    /// Uses a fixed-key hasher, so the value does not change between runs of
    /// the same build.
    pub fn structural_hash(&self) -> u64 {
        let mut hash = HASH_SEED;
        hash = combine_hash(hash, str_hash(&self.readable_name()));
        hash = combine_hash(hash, str_hash(&self.unlabeled_name()));
        for child in self.children() {
            hash = combine_hash(hash, child.structural_hash());
        }
        hash
    }
}

/// One step of the structural hash: `hash * 31 + value`, wrapping.
pub fn combine_hash(hash: u64, value: u64) -> u64 {
    hash.wrapping_mul(HASH_MULTIPLIER).wrapping_add(value)
}

fn str_hash(s: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    s.hash(&mut hasher);
    hasher.finish()
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        if self.readable_name() != other.readable_name()
            || self.unlabeled_name() != other.unlabeled_name()
        {
            return false;
        }
        let (ours, theirs) = (self.children(), other.children());
        ours.len() == theirs.len() && ours.iter().zip(theirs).all(|(a, b)| a == b)
    }
}

impl Eq for TypeDescriptor {}

impl hash::Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.structural_hash());
    }
}
