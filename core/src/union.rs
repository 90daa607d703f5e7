//! The alternatives of a union, as the unit of code generation.

use core::hash::{Hash, Hasher};
use core::slice;

use hashbrown::{HashMap, HashSet};
use unionname_types::{HASH_SEED, TypeDescription, TypeDescriptor, combine_hash};

use crate::api::{Diagnostic, Error};
use crate::signature::{DEFAULT_UNION_NAME, Signature, SignatureOptions, Span, parse_signature};

const NOT_A_UNION: &str = "U001";
const MEMBER_COLLISION: &str = "U002";

/// One descriptor per union alternative, in declaration order.
///
/// Two lists are equal when they have the same length and are pairwise
/// structurally equal, so identical unions are generated once.
#[derive(Debug, Clone, Default)]
pub struct Alternatives(Vec<TypeDescriptor>);

impl Alternatives {
    pub fn new(alternatives: Vec<TypeDescriptor>) -> Self {
        Alternatives(alternatives)
    }

    /// Alternatives of a `OneOf<...>` type, or `None` for any other type.
    pub fn from_union<D: TypeDescription>(desc: &D) -> Option<Self> {
        Self::from_union_named(desc, DEFAULT_UNION_NAME)
    }

    /// Like [`Alternatives::from_union`] for a union type called `union_name`.
    ///
    /// Every type argument is an alternative, open type parameters included,
    /// so positions line up with `T0`, `T1`, ...
    pub fn from_union_named<D: TypeDescription>(desc: &D, union_name: &str) -> Option<Self> {
        if desc.name() != union_name {
            tracing::debug!(
                name = desc.name(),
                expected = union_name,
                "type is not a union"
            );
            return None;
        }
        let alternatives = desc
            .type_arguments()
            .map(|arg| TypeDescriptor::from_description(arg))
            .collect();
        Some(Alternatives(alternatives))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TypeDescriptor> {
        self.0.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, TypeDescriptor> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[TypeDescriptor] {
        &self.0
    }

    /// Namespaces every alternative depends on, sorted, for `using` lines.
    pub fn system_namespaces(&self) -> Vec<String> {
        let mut namespaces = HashSet::new();
        for alternative in &self.0 {
            namespaces.extend(alternative.system_namespaces());
        }
        let mut namespaces: Vec<_> = namespaces.into_iter().collect();
        namespaces.sort_unstable();
        namespaces
    }

    /// Hint names of the alternatives joined with `_`, for naming the
    /// generated file.
    pub fn hint_name(&self) -> String {
        self.0
            .iter()
            .map(TypeDescriptor::hint_name)
            .collect::<Vec<_>>()
            .join("_")
    }

    pub fn structural_hash(&self) -> u64 {
        self.0.iter().fold(HASH_SEED, |hash, alternative| {
            combine_hash(hash, alternative.structural_hash())
        })
    }
}

impl PartialEq for Alternatives {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().zip(&other.0).all(|(a, b)| a == b)
    }
}

impl Eq for Alternatives {}

impl Hash for Alternatives {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.structural_hash());
    }
}

impl<'a> IntoIterator for &'a Alternatives {
    type Item = &'a TypeDescriptor;
    type IntoIter = slice::Iter<'a, TypeDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<TypeDescriptor> for Alternatives {
    fn from_iter<I: IntoIterator<Item = TypeDescriptor>>(iter: I) -> Self {
        Alternatives(iter.into_iter().collect())
    }
}

/// Alternatives lists already handed to the generator, numbered in the
/// order they were first seen.
#[derive(Debug, Default)]
pub struct UnionSet {
    seen: HashMap<Alternatives, usize>,
}

impl UnionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `alternatives`. Returns `None` when the list is new, or the
    /// number of the equal list recorded earlier.
    pub fn insert(&mut self, alternatives: Alternatives) -> Option<usize> {
        if let Some(&first) = self.seen.get(&alternatives) {
            tracing::trace!(
                hint = %alternatives.hint_name(),
                first,
                "union already generated"
            );
            return Some(first);
        }
        let next = self.seen.len();
        self.seen.insert(alternatives, next);
        None
    }

    pub fn contains(&self, alternatives: &Alternatives) -> bool {
        self.seen.contains_key(alternatives)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// A union parsed from text, keeping the spans of its alternatives so
/// diagnostics can point at them.
#[derive(Debug, Clone)]
pub struct UnionSignature {
    signature: Signature,
    alternatives: Alternatives,
    source: String,
}

impl UnionSignature {
    pub fn parse(source: &str, options: &SignatureOptions) -> Result<Self, Error> {
        let signature = parse_signature(source, options)?;
        let Some(alternatives) = Alternatives::from_union_named(&signature, &options.union_name)
        else {
            let diagnostic = Diagnostic::error(
                format!(
                    "expected a `{}<...>` union, found `{}`",
                    options.union_name,
                    signature.name()
                ),
                signature.span().clone(),
            )
            .with_code(NOT_A_UNION)
            .with_help(format!(
                "list the alternatives as `{}<T0, T1, ...>`",
                options.union_name
            ));
            return Err(Error::compilation(diagnostic, source));
        };
        Ok(UnionSignature {
            signature,
            alternatives,
            source: source.to_string(),
        })
    }

    pub fn alternatives(&self) -> &Alternatives {
        &self.alternatives
    }

    pub fn into_alternatives(self) -> Alternatives {
        self.alternatives
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Where alternative `index` was written.
    pub fn span_of(&self, index: usize) -> &Span {
        self.signature
            .arguments()
            .get(index)
            .map_or(self.signature.span(), Signature::span)
    }

    /// Member-name collisions as warnings, or `None` when every generated
    /// member name is distinct.
    pub fn collision_warnings(&self) -> Option<Error> {
        let collisions = self.alternatives.members().collisions;
        if collisions.is_empty() {
            return None;
        }
        let diagnostics = collisions
            .iter()
            .map(|collision| {
                Diagnostic::warning(
                    format!(
                        "alternatives T{} and T{} both generate members named after `{}`",
                        collision.first, collision.second, collision.name
                    ),
                    self.span_of(collision.second).clone(),
                )
                .with_related(self.span_of(collision.first).clone(), "first used here")
                .with_code(MEMBER_COLLISION)
                .with_help("only the first alternative can be reached through named members")
            })
            .collect();
        Some(Error::Compilation {
            diagnostics,
            source: self.source.clone(),
            filename: None,
        })
    }
}
