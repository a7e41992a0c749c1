//! Integration tests for the `create` operation

mod common;

use common::{assert_output_eq, run_crudtoml};
use indoc::indoc;

#[test]
fn test_create_in_table() {
    let input = indoc! {r#"
        [project]
        name = "crudtoml"
    "#};
    let (stdout, stderr, code) =
        run_crudtoml(&["-", "create", "project", "dob", "2023-05-23"], input);
    assert_eq!(code, Some(0), "stderr: {}", stderr);
    assert_output_eq(
        &stdout,
        indoc! {r#"
            [project]
            name = "crudtoml"
            dob = 2023-05-23
        "#},
    );
}

#[test]
fn test_create_at_root() {
    let (stdout, stderr, code) = run_crudtoml(&["-", "create", "answer", "42"], "title = \"x\"\n");
    assert_eq!(code, Some(0), "stderr: {}", stderr);
    assert_output_eq(&stdout, "title = \"x\"\nanswer = 42\n");
}

#[test]
fn test_create_preserves_comments_elsewhere() {
    let input = indoc! {r#"
        # top of file
        [a]
        x = 1   # inline comment

        [b]
        y = 2
    "#};
    let (stdout, stderr, code) = run_crudtoml(&["-", "create", "a", "z", "3"], input);
    assert_eq!(code, Some(0), "stderr: {}", stderr);
    assert_output_eq(
        &stdout,
        indoc! {r#"
            # top of file
            [a]
            x = 1   # inline comment
            z = 3

            [b]
            y = 2
        "#},
    );
}

#[test]
fn test_create_existing_key_fails() {
    let input = "[project]\nname = \"crudtoml\"\n";
    let (stdout, stderr, code) = run_crudtoml(&["-", "create", "project", "name", "1"], input);
    assert_eq!(code, Some(6));
    assert!(stdout.is_empty());
    assert!(stderr.contains("already exists"), "stderr: {}", stderr);
}

#[test]
fn test_create_appends_to_array_at_length() {
    let (stdout, stderr, code) = run_crudtoml(&["-", "create", "items", "3", "4"], "items = [1, 2, 3]\n");
    assert_eq!(code, Some(0), "stderr: {}", stderr);
    assert_output_eq(&stdout, "items = [1, 2, 3, 4]\n");
}

#[test]
fn test_create_past_array_length_fails() {
    let (stdout, stderr, code) = run_crudtoml(&["-", "create", "items", "4", "4"], "items = [1, 2, 3]\n");
    assert_eq!(code, Some(5));
    assert!(stdout.is_empty());
    assert!(stderr.contains("not a valid index"), "stderr: {}", stderr);
}

#[test]
fn test_create_in_range_index_fails() {
    let (_, stderr, code) = run_crudtoml(&["-", "create", "items", "0", "9"], "items = [1, 2, 3]\n");
    assert_eq!(code, Some(6));
    assert!(stderr.contains("already exists"), "stderr: {}", stderr);
}

#[test]
fn test_create_no_intermediate_vivification() {
    let (stdout, stderr, code) = run_crudtoml(&["-", "create", "missing", "leaf", "1"], "a = 1\n");
    assert_eq!(code, Some(5));
    assert!(stdout.is_empty());
    assert!(stderr.contains("cannot find 'missing'"), "stderr: {}", stderr);
}

#[test]
fn test_create_bad_value_literal() {
    let (stdout, stderr, code) =
        run_crudtoml(&["-", "create", "a", "b", "[unterminated"], "a = {}\n");
    assert_eq!(code, Some(7));
    assert!(stdout.is_empty());
    assert!(stderr.contains("invalid TOML value"), "stderr: {}", stderr);
}

#[test]
fn test_create_inline_array_value() {
    let (stdout, stderr, code) =
        run_crudtoml(&["-", "create", "project", "tags", "[\"a\", \"b\"]"], "[project]\n");
    assert_eq!(code, Some(0), "stderr: {}", stderr);
    assert_output_eq(&stdout, "[project]\ntags = [\"a\", \"b\"]\n");
}

#[test]
fn test_create_into_scalar_fails() {
    let (_, stderr, code) = run_crudtoml(&["-", "create", "a", "b", "1"], "a = 1\n");
    assert_eq!(code, Some(4));
    assert!(stderr.contains("not a collection"), "stderr: {}", stderr);
}
