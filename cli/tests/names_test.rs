//! Integration tests for the `names` command.

mod common;

use common::{check_stdout, temp_file, unionname};
use expect_test::expect;
use predicates::prelude::*;

#[test]
fn names_of_generic_signature() {
    check_stdout(
        &[
            "names",
            "System.Collections.Generic.Dictionary<string, double?>",
        ],
        None,
        expect![[r#"
            System.Collections.Generic.Dictionary<string, double?>
              readable:    DictionaryOfString_NullableDouble
              declaration: Dictionary<string, double?>
              hint:        Dictionary<string_double?>
              namespaces:  System.Collections.Generic
        "#]],
    );
}

#[test]
fn names_of_several_signatures() {
    check_stdout(
        &["names", "int?", "(int? Id, string Name)"],
        None,
        expect![[r#"
            int?
              readable:    NullableInt
              declaration: int?
              hint:        NullableInt
              namespaces:  -
            (int? Id, string Name)
              readable:    ValueTupleOfNullableInt_String
              declaration: (int? Id, string Name)
              hint:        ValueTupleOfNullableInt_String
              namespaces:  -
        "#]],
    );
}

#[test]
fn names_with_declared_value_type() {
    unionname()
        .args(["names", "Geometry.Point?", "--value-type", "Geometry.Point"])
        .assert()
        .success()
        .stdout(predicate::str::contains("readable:    NullablePoint"));
}

#[test]
fn names_with_type_parameter() {
    unionname()
        .args([
            "names",
            "System.Collections.Generic.Dictionary<string, TValue>",
            "--type-param",
            "TValue",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("readable:    DictionaryOfString\n"));
}

#[test]
fn names_from_file() {
    let file = temp_file("// scalars\nint\n\nstring?\n");

    unionname()
        .args(["names", "--file", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("declaration: int\n"))
        .stdout(predicate::str::contains("declaration: string?\n"));
}

#[test]
fn names_from_stdin() {
    check_stdout(
        &["names", "--file", "-"],
        Some("System.Guid\n"),
        expect![[r#"
            System.Guid
              readable:    Guid
              declaration: Guid
              hint:        Guid
              namespaces:  -
        "#]],
    );
}

#[test]
fn names_parse_error() {
    unionname()
        .args(["--no-color", "names", "List<int"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[P001] Error"));
}

#[test]
fn names_keeps_going_after_an_error() {
    unionname()
        .args(["--no-color", "names", "Nullable<string>", "int"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("readable:    Int"))
        .stderr(predicate::str::contains("[P003] Error"));
}

#[test]
fn names_missing_file() {
    unionname()
        .args(["names", "--file", "/nonexistent/signatures.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/signatures.txt"));
}

#[test]
fn names_requires_input() {
    unionname().args(["names"]).assert().failure();
}
