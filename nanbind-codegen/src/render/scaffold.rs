//! The async scaffold: a Baton carrying plain data between the two phases
//! and a Worker running them.
//!
//! `Execute` runs off the caller's thread and may only touch Baton fields and
//! native pointers. `HandleOKCallback` runs back on the caller's thread and is
//! the only place runtime objects are built.

use nanbind_core::strip_pointer;
use nanbind_ir::{ArgSpec, FunctionSpec, NativeLibrary};

use crate::builder::{CodeFragment, Renderable};

/// Type of an argument's slot in the Baton.
///
/// The Baton owns resolved return values, so return arguments lose exactly
/// one level of indirection (`git_repository **` -> `git_repository *`).
pub fn baton_member_type(arg: &ArgSpec) -> String {
    if arg.is_return {
        strip_pointer(&arg.c_type)
    } else {
        arg.c_type.clone()
    }
}

pub(crate) fn baton_name(binding: &str) -> String {
    format!("{}Baton", binding)
}

pub(crate) fn worker_name(binding: &str) -> String {
    format!("{}Worker", binding)
}

/// The parameter bundle of one async binding.
pub struct BatonStruct<'a> {
    binding: &'a str,
    function: &'a FunctionSpec,
    library: &'a NativeLibrary,
}

impl<'a> BatonStruct<'a> {
    pub fn new(binding: &'a str, function: &'a FunctionSpec, library: &'a NativeLibrary) -> Self {
        Self {
            binding,
            function,
            library,
        }
    }
}

impl Renderable for BatonStruct<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = vec![
            CodeFragment::line("int error_code;"),
            CodeFragment::line(format!("const {}* error;", self.library.error_type)),
        ];
        body.extend(
            self.function
                .args
                .iter()
                .map(|arg| CodeFragment::line(format!("{} {};", baton_member_type(arg), arg.name))),
        );

        vec![CodeFragment::block(
            format!("struct {} {{", baton_name(self.binding)),
            body,
            "};",
        )]
    }
}

/// The worker class coordinating one async binding.
pub struct WorkerClass<'a> {
    binding: &'a str,
}

impl<'a> WorkerClass<'a> {
    pub fn new(binding: &'a str) -> Self {
        Self { binding }
    }
}

impl Renderable for WorkerClass<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let worker = worker_name(self.binding);
        let baton = baton_name(self.binding);

        vec![CodeFragment::block(
            format!("class {} : public NanAsyncWorker {{", worker),
            vec![
                CodeFragment::line("public:"),
                CodeFragment::indent(vec![
                    CodeFragment::line(format!(
                        "{}({} *_baton, NanCallback *callback)",
                        worker, baton
                    )),
                    CodeFragment::indent(vec![CodeFragment::line(
                        ": NanAsyncWorker(callback), baton(_baton) {};",
                    )]),
                    CodeFragment::line(format!("~{}() {{}};", worker)),
                    CodeFragment::line("void Execute();"),
                    CodeFragment::line("void HandleOKCallback();"),
                ]),
                CodeFragment::blank(),
                CodeFragment::line("private:"),
                CodeFragment::indent(vec![CodeFragment::line(format!("{} *baton;", baton))]),
            ],
            "};",
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CodeBuilder;

    fn open_bare() -> FunctionSpec {
        FunctionSpec::new("OpenBare")
            .asynchronous()
            .arg(ArgSpec::new("path", "const char*"))
            .arg(ArgSpec::new("out", "git_repository**").returned())
    }

    #[test]
    fn test_baton_member_type() {
        assert_eq!(
            baton_member_type(&ArgSpec::new("out", "git_repository**").returned()),
            "git_repository*"
        );
        assert_eq!(
            baton_member_type(&ArgSpec::new("out", "git_oid *").returned()),
            "git_oid"
        );
        assert_eq!(
            baton_member_type(&ArgSpec::new("repo", "git_repository **")),
            "git_repository **"
        );
    }

    #[test]
    fn test_baton_struct() {
        let function = open_bare();
        let library = NativeLibrary::default();
        let mut builder = CodeBuilder::cpp();
        builder.emit(&BatonStruct::new("OpenBare", &function, &library));

        assert_eq!(
            builder.build(),
            "struct OpenBareBaton {\n  int error_code;\n  const git_error* error;\n  const char* path;\n  git_repository* out;\n};\n"
        );
    }

    #[test]
    fn test_worker_class() {
        let mut builder = CodeBuilder::cpp();
        builder.emit(&WorkerClass::new("OpenBare"));
        let code = builder.build();

        assert!(code.starts_with("class OpenBareWorker : public NanAsyncWorker {\n  public:\n"));
        assert!(code.contains("    OpenBareWorker(OpenBareBaton *_baton, NanCallback *callback)\n"));
        assert!(code.contains("      : NanAsyncWorker(callback), baton(_baton) {};\n"));
        assert!(code.contains("    void Execute();\n    void HandleOKCallback();\n"));
        assert!(code.ends_with("\n  private:\n    OpenBareBaton *baton;\n};\n"));
    }
}
