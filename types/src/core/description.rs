use super::flags::TyFlags;
use super::kind::TyKind;
use super::ty::TypeDescriptor;

/// What the engine needs to know about a host type.
///
/// Each host (a compiler's symbol table, the textual signature parser, a
/// test fixture) implements this once; the engine never sees host types.
///
/// A nullable value type must be described the way the host compiler models
/// it: as the `Nullable` wrapper, a value type annotated as nullable, whose
/// single type argument is the underlying type.
pub trait TypeDescription {
    /// Unqualified declared name: `Int32`, `List`, `Nullable`, `ValueTuple`.
    fn name(&self) -> &str;

    /// Namespace-qualified name without generic arguments.
    fn qualified_name(&self) -> &str;

    /// False for anything that is not a nominal type, e.g. an open type
    /// parameter. Such arguments are skipped when building generic nodes.
    fn is_named(&self) -> bool;

    fn is_value_type(&self) -> bool;

    /// The type itself carries the nullable annotation.
    fn is_nullable_annotated(&self) -> bool;

    fn is_tuple(&self) -> bool;

    /// Generic type arguments (for tuples: element types) in declaration order.
    fn type_arguments(&self) -> impl Iterator<Item = &Self>;

    /// Tuple elements with their labels. Unlabeled elements report the
    /// default `Item1`, `Item2`, ... names. Empty for non-tuples.
    fn tuple_elements(&self) -> impl Iterator<Item = (&str, &Self)>;
}

/// Whether a tuple element label is the compiler's positional default.
///
/// Only the `Item` prefix and the last character are inspected, so a custom
/// label such as `ItemCount2` is misread as a default one. Any Unicode numeric
/// character counts as the last one, not only `0`-`9`.
pub fn is_default_element_name(name: &str) -> bool {
    name.starts_with("Item") && name.chars().last().is_some_and(char::is_numeric)
}

impl TypeDescriptor {
    /// Build the descriptor tree for a host type.
    pub fn from_description<D: TypeDescription>(desc: &D) -> Self {
        build(desc, None)
    }

    /// Build the descriptor for a labeled tuple element.
    pub fn from_field<D: TypeDescription>(label: &str, desc: &D) -> Self {
        build(desc, Some(label))
    }
}

fn build<D: TypeDescription>(desc: &D, field: Option<&str>) -> TypeDescriptor {
    let annotated = desc.is_nullable_annotated();
    let mut dropped = false;
    let mut named_args = || {
        desc.type_arguments()
            .filter(|arg| {
                let keep = arg.is_named();
                if !keep {
                    tracing::debug!(
                        parent = desc.qualified_name(),
                        argument = arg.name(),
                        "skipping type argument that is not a named type"
                    );
                    dropped = true;
                }
                keep
            })
            .map(|arg| build(arg, None))
            .collect::<Vec<_>>()
    };

    let kind = if annotated && desc.is_value_type() {
        let inner = named_args().into_iter().next().map(Box::new);
        TyKind::NullableValue(inner)
    } else if desc.is_tuple() && has_custom_labels(desc) {
        let elements = desc
            .tuple_elements()
            .map(|(label, element)| build(element, Some(label)))
            .collect();
        TyKind::Tuple(elements)
    } else if desc.is_tuple() {
        TyKind::Tuple(named_args())
    } else {
        let args = named_args();
        if args.is_empty() && !dropped {
            TyKind::Scalar {
                nullable: annotated,
            }
        } else {
            TyKind::Generic {
                args,
                nullable: annotated,
            }
        }
    };

    let flags = if dropped {
        TyFlags::DROPPED_ARGS
    } else {
        TyFlags::empty()
    };
    let node = TypeDescriptor::new(desc.name(), desc.qualified_name(), kind).with_flags(flags);
    match field {
        Some(label) => node.with_field_name(label),
        None => node,
    }
}

fn has_custom_labels<D: TypeDescription>(desc: &D) -> bool {
    let mut elements = desc.tuple_elements().peekable();
    elements.peek().is_some() && !elements.all(|(label, _)| is_default_element_name(label))
}
