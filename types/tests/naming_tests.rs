//! Naming properties of descriptor trees built with `desc!`.

use std::sync::Arc;
use std::thread;

use hashbrown::HashSet;
use pretty_assertions::assert_eq;
use unionname_types::{TypeDescriptor, desc};

fn names(ty: &TypeDescriptor) -> (String, String, String) {
    (ty.readable_name(), ty.fully_qualified_name(), ty.hint_name())
}

// ============================================================================
// Scalars and nullability
// ============================================================================

#[test]
fn test_int_alias() {
    let ty = desc!(Int);
    assert_eq!(names(&ty), ("Int".into(), "int".into(), "int".into()));
}

#[test]
fn test_nullable_int() {
    let ty = desc!(Int?);
    assert_eq!(ty.readable_name(), "NullableInt");
    assert_eq!(ty.fully_qualified_name(), "int?");
    assert_eq!(ty.hint_name(), "NullableInt");
}

#[test]
fn test_nullable_reference_string() {
    let ty = desc!(Str?);
    assert_eq!(ty.readable_name(), "String");
    assert_eq!(ty.fully_qualified_name(), "string?");
    assert_eq!(ty.hint_name(), "Nullablestring");
}

#[test]
fn test_every_scalar_keyword() {
    let cases = [
        (desc!(Double), "Double", "double"),
        (desc!(Long), "Long", "long"),
        (desc!(Short), "Short", "short"),
        (desc!(Bool), "Bool", "bool"),
        (desc!(Object), "Object", "object"),
        (desc!(Decimal), "Decimal", "decimal"),
        (desc!(Float), "Float", "float"),
        (desc!(Byte), "Byte", "byte"),
        (desc!(SByte), "Sbyte", "sbyte"),
        (desc!(UInt16), "Ushort", "ushort"),
        (desc!(UInt32), "Uint", "uint"),
        (desc!(UInt64), "Ulong", "ulong"),
        (desc!(Char), "Char", "char"),
    ];
    for (ty, readable, declaration) in cases {
        assert_eq!(ty.readable_name(), readable);
        assert_eq!(ty.fully_qualified_name(), declaration);
    }
}

#[test]
fn test_system_value_type_outside_alias_table() {
    let ty = desc!(DateTime?);
    assert_eq!(ty.readable_name(), "NullableDateTime");
    assert_eq!(ty.fully_qualified_name(), "DateTime?");
    assert!(ty.system_namespaces().is_empty());
}

#[test]
fn test_custom_type_keeps_namespace() {
    let ty = TypeDescriptor::scalar(
        "NestedCustomType",
        "SomeNamespace.CustomType.NestedCustomType",
    );
    assert_eq!(ty.readable_name(), "NestedCustomType");
    assert_eq!(
        ty.fully_qualified_name(),
        "SomeNamespace.CustomType.NestedCustomType"
    );
    assert_eq!(ty.hint_name(), "SomeNamespace.CustomType.NestedCustomType");
}

// ============================================================================
// Generics
// ============================================================================

#[test]
fn test_list_of_int() {
    let ty = desc!(List[Int]);
    assert_eq!(ty.readable_name(), "ListOfInt");
    assert_eq!(ty.fully_qualified_name(), "List<int>");
    assert_eq!(ty.hint_name(), "List<int>");
}

#[test]
fn test_dictionary_of_string_int() {
    let ty = desc!(Dictionary[Str, Int]);
    assert_eq!(ty.readable_name(), "DictionaryOfString_Int");
    assert_eq!(ty.fully_qualified_name(), "Dictionary<string, int>");
    assert_eq!(ty.hint_name(), "Dictionary<string_int>");
}

#[test]
fn test_dictionary_with_nullable_value() {
    let ty = desc!(Dictionary[Str, Double?]);
    assert_eq!(ty.readable_name(), "DictionaryOfString_NullableDouble");
    assert_eq!(ty.fully_qualified_name(), "Dictionary<string, double?>");
}

#[test]
fn test_nested_generics() {
    let ty = desc!(List[Dictionary[Str, List[Int?]]]);
    assert_eq!(
        ty.readable_name(),
        "ListOfDictionaryOfString_ListOfNullableInt"
    );
    assert_eq!(
        ty.fully_qualified_name(),
        "List<Dictionary<string, List<int?>>>"
    );
}

#[test]
fn test_reference_tuple_is_a_plain_generic() {
    let ty = desc!(Tuple[Int?, Str, Char?]);
    assert_eq!(ty.readable_name(), "TupleOfNullableInt_String_NullableChar");
    assert_eq!(ty.fully_qualified_name(), "Tuple<int?, string, char?>");
    assert_eq!(ty.hint_name(), "Tuple<int?_string_char?>");
}

#[test]
fn test_nullable_generic_reference_drops_marker() {
    let ty = desc!(List[Int]?);
    assert_eq!(ty.readable_name(), "ListOfInt");
    assert_eq!(ty.fully_qualified_name(), "List<int>");
}

// ============================================================================
// Tuples
// ============================================================================

#[test]
fn test_unlabeled_tuple() {
    let ty = desc!((Int?, Str, Char?));
    assert_eq!(
        ty.readable_name(),
        "ValueTupleOfNullableInt_String_NullableChar"
    );
    assert_eq!(ty.fully_qualified_name(), "(int?, string, char?)");
    assert_eq!(
        ty.hint_name(),
        "ValueTupleOfNullableInt_String_NullableChar"
    );
}

#[test]
fn test_labeled_tuple() {
    let ty = desc!((Id: Int?, Name: Str));
    assert_eq!(ty.fully_qualified_name(), "(int? Id, string Name)");
    assert_eq!(ty.readable_name(), "ValueTupleOfNullableInt_String");
}

#[test]
fn test_nullable_tuple() {
    let ty = desc!((Int, Str)?);
    assert_eq!(ty.readable_name(), "NullableValueTupleOfInt_String");
    assert_eq!(ty.fully_qualified_name(), "(System.Int32, System.String)?");
}

#[test]
fn test_tuple_inside_generic() {
    let ty = desc!(List[(X: Int, Y: Int)]);
    assert_eq!(ty.readable_name(), "ListOfValueTupleOfInt_Int");
    assert_eq!(ty.fully_qualified_name(), "List<(int X, int Y)>");
}

// ============================================================================
// Namespaces
// ============================================================================

#[test]
fn test_namespaces_deduplicated() {
    let ty = desc!(Dictionary[List[Int], HashSet[List[Str]]]);
    let expected: HashSet<String> = ["System.Collections.Generic".to_string()]
        .into_iter()
        .collect();
    assert_eq!(ty.system_namespaces(), expected);
}

#[test]
fn test_namespaces_skip_bare_root_and_foreign_roots() {
    assert!(desc!(Int).system_namespaces().is_empty());
    assert!(desc!(Guid).system_namespaces().is_empty());
    assert!(desc!(CustomType).system_namespaces().is_empty());

    let mixed = TypeDescriptor::generic(
        "Wrapper",
        "MyApp.Wrapper",
        [
            desc!(List[Int]),
            TypeDescriptor::scalar("Regex", "System.Text.RegularExpressions.Regex"),
        ],
    );
    let mut namespaces: Vec<_> = mixed.system_namespaces().into_iter().collect();
    namespaces.sort();
    assert_eq!(
        namespaces.join(", "),
        "System.Collections.Generic, System.Text.RegularExpressions"
    );
}

// ============================================================================
// Determinism, distinctness, equality
// ============================================================================

#[test]
fn test_renderings_are_deterministic() {
    let ty = desc!(Dictionary[Str, (Id: Int?, Tags: List[Str?])]);
    let first = (names(&ty), ty.structural_hash());
    for _ in 0..10 {
        assert_eq!((names(&ty), ty.structural_hash()), first);
    }
}

#[test]
fn test_structurally_different_trees_have_different_readable_names() {
    let trees = [
        desc!(Int),
        desc!(Int?),
        desc!(List[Int]),
        desc!(List[Int?]),
        desc!(List[Str]),
        desc!(Tuple[Int, Str]),
        desc!((Int, Str)),
        desc!(Dictionary[Str, Int]),
        desc!(Dictionary[Int, Str]),
    ];
    let readable: HashSet<String> = trees.iter().map(|t| t.readable_name()).collect();
    assert_eq!(readable.len(), trees.len());
}

#[test]
fn test_equal_trees_hash_equal() {
    let pairs = [
        (desc!(List[Int]), desc!(List[Int])),
        (desc!((Id: Int?, Name: Str)), desc!((Int?, Str))),
        (desc!((A: Int, B: Int)), desc!((X: Int, Y: Int))),
    ];
    for (a, b) in pairs {
        assert_eq!(a, b);
        assert_eq!(a.structural_hash(), b.structural_hash());
    }
}

#[test]
fn test_dedup_in_hash_set() {
    let mut seen = HashSet::new();
    assert!(seen.insert(desc!(List[Int])));
    assert!(!seen.insert(desc!(List[Int])));
    assert!(seen.insert(desc!(List[Int?])));
    assert!(seen.insert(desc!((Id: Int, Name: Str))));
    assert!(!seen.insert(desc!((Int, Str))));
    assert_eq!(seen.len(), 3);
}

// ============================================================================
// Sharing across threads
// ============================================================================

fn assert_send_sync<T: Send + Sync>() {}

fn shared_names(ty: &TypeDescriptor) -> (String, String, u64) {
    (ty.readable_name(), ty.fully_qualified_name(), ty.structural_hash())
}

#[test]
fn test_descriptor_is_send_and_sync() {
    assert_send_sync::<TypeDescriptor>();
}

#[test]
fn test_naming_agrees_across_threads() {
    let ty = Arc::new(desc!(Dictionary[Str, (Id: Int?, Tags: List[Str?])]));
    let expected = shared_names(&ty);
    assert_eq!(
        expected.0,
        "DictionaryOfString_ValueTupleOfNullableInt_ListOfString"
    );
    assert_eq!(
        expected.1,
        "Dictionary<string, (int? Id, List<string?> Tags)>"
    );

    let workers: Vec<_> = (0..8)
        .map(|_| {
            let ty = Arc::clone(&ty);
            thread::spawn(move || shared_names(&ty))
        })
        .collect();
    for worker in workers {
        assert_eq!(worker.join().unwrap(), expected);
    }
}
