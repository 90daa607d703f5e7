use super::flags::TyFlags;
use super::ty::TypeDescriptor;

/// The shape of a descriptor node.
///
/// Nullability is carried by the variant rather than by free-standing
/// booleans, so a node can never be both a nullable value and a nullable
/// reference, nor a nullable tuple.
#[derive(Debug, Clone)]
pub enum TyKind {
    /// A non-generic nominal type (`Int32`, `String`, `CustomType`).
    ///
    /// `nullable` is the reference-type annotation (`string?`).
    Scalar { nullable: bool },

    /// A generic nominal type with its type arguments in declaration order.
    ///
    /// Arguments the engine does not model are not stored here, so `args`
    /// may be empty for an open generic.
    Generic {
        args: Vec<TypeDescriptor>,
        nullable: bool,
    },

    /// A value tuple. Elements keep their custom labels (if any) in
    /// [`TypeDescriptor::field_name`].
    Tuple(Vec<TypeDescriptor>),

    /// A value type wrapped in the nullable modifier (`int?`).
    ///
    /// The wrapped type is `None` when the host handed us something the
    /// engine skips, e.g. `T?` over a type parameter.
    NullableValue(Option<Box<TypeDescriptor>>),
}

impl TyKind {
    pub fn compute_flags(&self) -> TyFlags {
        let children = |list: &[TypeDescriptor]| {
            list.iter()
                .fold(TyFlags::empty(), |acc, child| acc | child.flags())
        };
        match self {
            TyKind::Scalar { nullable } => nullable_flag(*nullable),
            TyKind::Generic { args, nullable } => children(args) | nullable_flag(*nullable),
            TyKind::Tuple(elements) => {
                let labeled = if elements.iter().any(|e| e.field_name().is_some()) {
                    TyFlags::LABELED
                } else {
                    TyFlags::empty()
                };
                children(elements) | labeled
            }
            TyKind::NullableValue(inner) => {
                TyFlags::NULLABLE | inner.as_deref().map_or(TyFlags::empty(), |t| t.flags())
            }
        }
    }

    /// Nested descriptors in declaration order.
    pub fn children(&self) -> &[TypeDescriptor] {
        match self {
            TyKind::Scalar { .. } => &[],
            TyKind::Generic { args, .. } => args,
            TyKind::Tuple(elements) => elements,
            TyKind::NullableValue(Some(inner)) => core::slice::from_ref(&**inner),
            TyKind::NullableValue(None) => &[],
        }
    }

    pub fn is_tuple(&self) -> bool {
        matches!(self, TyKind::Tuple(_))
    }

    pub fn is_nullable_value(&self) -> bool {
        matches!(self, TyKind::NullableValue(_))
    }

    pub fn is_nullable_reference(&self) -> bool {
        matches!(
            self,
            TyKind::Scalar { nullable: true } | TyKind::Generic { nullable: true, .. }
        )
    }
}

fn nullable_flag(nullable: bool) -> TyFlags {
    if nullable {
        TyFlags::NULLABLE
    } else {
        TyFlags::empty()
    }
}
