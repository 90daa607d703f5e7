use string_cache::DefaultAtom;

use super::flags::TyFlags;
use super::kind::TyKind;

/// Interned identifier. Qualified names such as `System.Int32` repeat across
/// every descriptor built in a process, so they are stored once.
pub type Ident = DefaultAtom;

/// One type argument at one nesting position, plus everything needed to
/// name and render it.
///
/// Descriptors are immutable once built. `PartialEq`, `Eq` and `Hash` are
/// structural over the rendered names (see `eq.rs`), never over raw fields.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    name: Ident,
    qualified: Ident,
    kind: TyKind,
    field: Option<Ident>,
    flags: TyFlags,
}

impl TypeDescriptor {
    /// Build a node from its parts.
    ///
    /// `name` is the unqualified declared name (`Int32`, `List`, `Nullable`,
    /// `ValueTuple`) and `qualified` the namespace-qualified name without
    /// generic arguments (`System.Collections.Generic.List`, `System.Int32?`).
    pub fn new(name: impl AsRef<str>, qualified: impl AsRef<str>, kind: TyKind) -> Self {
        let flags = kind.compute_flags();
        Self {
            name: Ident::from(name.as_ref()),
            qualified: Ident::from(qualified.as_ref()),
            kind,
            field: None,
            flags,
        }
    }

    pub fn scalar(name: impl AsRef<str>, qualified: impl AsRef<str>) -> Self {
        Self::new(name, qualified, TyKind::Scalar { nullable: false })
    }

    pub fn generic(
        name: impl AsRef<str>,
        qualified: impl AsRef<str>,
        args: impl IntoIterator<Item = TypeDescriptor>,
    ) -> Self {
        let kind = TyKind::Generic {
            args: args.into_iter().collect(),
            nullable: false,
        };
        Self::new(name, qualified, kind)
    }

    /// A nullable value wrapping `inner`, named the way the host reports it:
    /// simple name `Nullable`, qualified name `<inner>?`.
    pub fn nullable_value(inner: TypeDescriptor) -> Self {
        let qualified = format!("{}?", inner.qualified_name());
        Self::new(
            "Nullable",
            qualified,
            TyKind::NullableValue(Some(Box::new(inner))),
        )
    }

    pub fn tuple(
        qualified: impl AsRef<str>,
        elements: impl IntoIterator<Item = TypeDescriptor>,
    ) -> Self {
        let elements = elements.into_iter().collect();
        Self::new("ValueTuple", qualified, TyKind::Tuple(elements))
    }

    /// Mark a leaf or generic node as an annotated nullable reference.
    ///
    /// Tuples and nullable values have no reference form and are returned
    /// unchanged.
    pub fn with_nullable_reference(mut self) -> Self {
        match &mut self.kind {
            TyKind::Scalar { nullable } | TyKind::Generic { nullable, .. } => {
                *nullable = true;
                self.flags |= TyFlags::NULLABLE;
            }
            TyKind::Tuple(_) | TyKind::NullableValue(_) => {}
        }
        self
    }

    /// Attach the declared label of a tuple element.
    pub fn with_field_name(mut self, field: impl AsRef<str>) -> Self {
        self.field = Some(Ident::from(field.as_ref()));
        self
    }

    pub(crate) fn with_flags(mut self, flags: TyFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn simple_name(&self) -> &str {
        &self.name
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified
    }

    pub fn kind(&self) -> &TyKind {
        &self.kind
    }

    pub fn children(&self) -> &[TypeDescriptor] {
        self.kind.children()
    }

    pub fn field_name(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn flags(&self) -> TyFlags {
        self.flags
    }

    pub fn is_tuple(&self) -> bool {
        self.kind.is_tuple()
    }

    pub fn is_nullable_value(&self) -> bool {
        self.kind.is_nullable_value()
    }

    pub fn is_nullable_reference(&self) -> bool {
        self.kind.is_nullable_reference()
    }

    /// True when the host annotated the type itself with `?`, whichever
    /// kind of nullability that means.
    pub fn is_nullable_annotated(&self) -> bool {
        self.is_nullable_value() || self.is_nullable_reference()
    }
}
