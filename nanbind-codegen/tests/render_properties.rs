//! Structural properties that hold for every rendered class.

use nanbind_codegen::{RenderError, render_declaration, render_implementation};
use nanbind_ir::{ArgSpec, ClassSpec, FieldSpec, FunctionSpec, ReturnSpec};

fn sample_classes() -> Vec<ClassSpec> {
    vec![
        ClassSpec::new("Threads").function(
            FunctionSpec::new("Init")
                .calls("git_threads_init")
                .returns(ReturnSpec::error_code()),
        ),
        ClassSpec::new("Oid")
            .c_type("git_oid")
            .free_function("free")
            .function(
                FunctionSpec::new("Sha")
                    .calls("git_oid_allocfmt")
                    .prototype()
                    .returns(ReturnSpec::new("char *"))
                    .arg(ArgSpec::new("oid", "const git_oid *").receiver()),
            ),
        ClassSpec::new("Signature")
            .c_type("git_signature")
            .forward_declare()
            .field(FieldSpec::new("name", "const char *").accessor("Name"))
            .field(FieldSpec::new("secret", "const char *").accessor("Secret").ignored()),
        ClassSpec::new("Repository")
            .c_type("git_repository")
            .free_function("git_repository_free")
            .function(
                FunctionSpec::new("Open")
                    .asynchronous()
                    .calls("git_repository_open")
                    .returns(ReturnSpec::error_code())
                    .arg(ArgSpec::new("out", "git_repository **").returned())
                    .arg(ArgSpec::new("path", "const char *")),
            )
            .function(
                FunctionSpec::new("Path")
                    .calls("git_repository_path")
                    .prototype()
                    .returns(ReturnSpec::new("const char *"))
                    .arg(ArgSpec::new("repo", "git_repository *").receiver()),
            )
            .function(
                FunctionSpec::new("Head")
                    .asynchronous()
                    .calls("git_repository_head")
                    .prototype()
                    .returns(ReturnSpec::error_code())
                    .arg(ArgSpec::new("out", "git_reference **").returned())
                    .arg(ArgSpec::new("repo", "git_repository *").receiver()),
            ),
    ]
}

#[test]
fn test_payloadless_class_has_no_native_members() {
    let class = &sample_classes()[0];
    let header = render_declaration(class).unwrap();
    let source = render_implementation(class).unwrap();

    for code in [&header, &source] {
        assert!(!code.contains("raw"), "unexpected raw payload:\n{code}");
        assert!(!code.contains("GetValue"));
        assert!(!code.contains("~Threads"));
        assert!(!code.contains("New(void *raw)"));
    }
    assert!(header.contains("static NAN_METHOD(Init);"));
}

#[test]
fn test_ignored_members_never_appear() {
    let class = &sample_classes()[2];
    let header = render_declaration(class).unwrap();
    let source = render_implementation(class).unwrap();

    assert!(header.contains("static NAN_METHOD(Name);"));
    assert!(header.contains("  const char * name;\n"));
    for code in [&header, &source] {
        assert!(!code.contains("Secret"));
        assert!(!code.contains("secret"));
    }
}

#[test]
fn test_one_baton_and_worker_per_async_function() {
    let class = &sample_classes()[3];
    let header = render_declaration(class).unwrap();
    let source = render_implementation(class).unwrap();

    for binding in ["Open", "Head"] {
        assert_eq!(header.matches(&format!("struct {binding}Baton {{")).count(), 1);
        assert_eq!(
            header
                .matches(&format!("class {binding}Worker : public NanAsyncWorker {{"))
                .count(),
            1
        );
        assert_eq!(header.matches(&format!("static NAN_METHOD({binding});")).count(), 1);
        assert_eq!(source.matches(&format!("NAN_METHOD(Repository::{binding}) {{")).count(), 1);
        assert_eq!(
            source
                .matches(&format!("void Repository::{binding}Worker::Execute() {{"))
                .count(),
            1
        );
    }

    // The synchronous function gets a method but no scaffolding.
    assert!(header.contains("static NAN_METHOD(Path);"));
    assert!(!header.contains("PathBaton"));
    assert!(!header.contains("PathWorker"));
}

#[test]
fn test_baton_return_members_drop_one_indirection() {
    let class = &sample_classes()[3];
    let header = render_declaration(class).unwrap();

    assert!(header.contains("    git_repository * out;\n"));
    assert!(header.contains("    git_reference * out;\n"));
    assert!(header.contains("    const char * path;\n"));
    assert!(header.contains("    git_repository * repo;\n"));
    assert!(!header.contains("git_repository ** out;"));
}

#[test]
fn test_receiver_is_not_a_caller_argument() {
    let class = &sample_classes()[3];
    let source = render_implementation(class).unwrap();

    // Head takes only the callback from the caller.
    assert!(source.contains("if (args.Length() == 0 || !args[0]->IsFunction()) {"));
    assert!(source.contains(
        "baton->repo = ObjectWrap::Unwrap<Repository>(args.This())->GetValue();"
    ));
    assert!(source.contains("worker->SaveToPersistent(\"repo\", args.This());"));
    assert!(source.contains("to = GitReference::New((void *)baton->out);"));
}

#[test]
fn test_rendering_is_deterministic() {
    for class in sample_classes() {
        assert_eq!(render_declaration(&class), render_declaration(&class));
        assert_eq!(render_implementation(&class), render_implementation(&class));
    }
}

#[test]
fn test_dependencies_keep_declared_order() {
    let class = ClassSpec::new("Commit")
        .c_type("git_commit")
        .dependency("../include/oid.h")
        .dependency("../include/repo.h")
        .dependency("../include/signature.h");

    let header = render_declaration(&class).unwrap();
    let source = render_implementation(&class).unwrap();

    for code in [&header, &source] {
        let oid = code.find("#include \"../include/oid.h\"").unwrap();
        let repo = code.find("#include \"../include/repo.h\"").unwrap();
        let signature = code.find("#include \"../include/signature.h\"").unwrap();
        assert!(oid < repo && repo < signature);
    }
}

#[test]
fn test_header_shape() {
    for class in sample_classes() {
        let header = render_declaration(&class).unwrap();
        let guard = format!("{}_H", class.cpp_class_name.to_uppercase());

        assert!(header.starts_with(&format!("#ifndef {guard}\n#define {guard}\n")));
        assert!(header.ends_with("};\n\n#endif\n"));
        assert!(!header.contains("\n\n\n"));
    }
}

#[test]
fn test_every_declared_method_is_defined() {
    for class in sample_classes() {
        let header = render_declaration(&class).unwrap();
        let source = render_implementation(&class).unwrap();

        for line in header.lines() {
            let Some(rest) = line.trim().strip_prefix("static NAN_METHOD(") else {
                continue;
            };
            let method = rest.trim_end_matches(");");
            let definition = format!("NAN_METHOD({}::{}) {{", class.cpp_class_name, method);
            assert!(source.contains(&definition), "missing {definition}");
        }
    }
}

#[test]
fn test_invalid_classes_are_rejected() {
    assert_eq!(
        render_declaration(&ClassSpec::new("")),
        Err(RenderError::MissingClassName)
    );

    let duplicated = ClassSpec::new("Repository")
        .function(FunctionSpec::new("Open").calls("git_repository_open"))
        .function(FunctionSpec::new("Open").calls("git_repository_open_ext"));
    assert!(matches!(
        render_declaration(&duplicated),
        Err(RenderError::DuplicateFunction { .. })
    ));
    assert!(matches!(
        render_implementation(&duplicated),
        Err(RenderError::DuplicateFunction { .. })
    ));
}
