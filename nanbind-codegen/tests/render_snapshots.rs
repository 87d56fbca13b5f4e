//! Snapshot tests for the rendered wrapper sources.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use nanbind_codegen::{render_declaration, render_implementation};
use nanbind_ir::{ArgSpec, ClassSpec, FieldSpec, FunctionSpec, ReturnSpec};

fn repository() -> ClassSpec {
    ClassSpec::new("Repository")
        .c_type("git_repository")
        .function(
            FunctionSpec::new("OpenBare")
                .asynchronous()
                .arg(ArgSpec::new("path", "const char*"))
                .arg(ArgSpec::new("out", "git_repository**").returned()),
        )
}

fn signature() -> ClassSpec {
    ClassSpec::new("Signature")
        .c_type("git_signature")
        .forward_declare()
        .dependency("../include/time.h")
        .field(FieldSpec::new("name", "const char *").accessor("Name"))
        .field(FieldSpec::new("email", "const char *").accessor("Email"))
        .field(FieldSpec::new("when", "git_time").accessor("Time"))
        .field(FieldSpec::new("offset", "int"))
        .field(FieldSpec::new("sign", "char").accessor("Sign").ignored())
        .function(FunctionSpec::new("Dup").calls("git_signature_dup").prototype())
}

#[test]
fn test_repository_declaration() {
    let header = render_declaration(&repository()).expect("render failed");
    insta::assert_snapshot!("repository_declaration", header);
}

#[test]
fn test_signature_declaration() {
    let header = render_declaration(&signature()).expect("render failed");
    insta::assert_snapshot!("signature_declaration", header);
}

#[test]
fn test_repository_implementation() {
    let class = ClassSpec::new("Repository")
        .c_type("git_repository")
        .free_function("git_repository_free")
        .function(
            FunctionSpec::new("OpenBare")
                .asynchronous()
                .calls("git_repository_open_bare")
                .returns(ReturnSpec::error_code())
                .arg(ArgSpec::new("out", "git_repository **").returned())
                .arg(ArgSpec::new("path", "const char *")),
        );

    let source = render_implementation(&class).expect("render failed");
    insta::assert_snapshot!("repository_implementation", source);
}
