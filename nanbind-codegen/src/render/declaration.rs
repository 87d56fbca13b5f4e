//! The `.h` declaration surface of a wrapper class.

use nanbind_core::include_guard;
use nanbind_ir::{ClassSpec, NativeLibrary};
use tracing::{debug, trace};

use super::{
    check_class,
    scaffold::{BatonStruct, WorkerClass},
};
use crate::{builder::CodeBuilder, error::RenderResult};

/// Render the declaration surface against the default (libgit2) library.
pub fn render_declaration(class: &ClassSpec) -> RenderResult<String> {
    DeclarationRenderer::new(&NativeLibrary::default()).render(class)
}

/// Renders wrapper class declarations for one native library.
pub struct DeclarationRenderer<'a> {
    library: &'a NativeLibrary,
}

impl<'a> DeclarationRenderer<'a> {
    pub fn new(library: &'a NativeLibrary) -> Self {
        Self { library }
    }

    /// Render the full header for `class`.
    ///
    /// Output is a pure function of the spec and the library.
    pub fn render(&self, class: &ClassSpec) -> RenderResult<String> {
        check_class(class)?;

        let guard = include_guard(&class.cpp_class_name);
        let mut b = CodeBuilder::cpp();

        b.push_line(&format!("#ifndef {}", guard))
            .push_line(&format!("#define {}", guard))
            .push_blank();

        self.includes(&mut b, class);
        self.forward_declaration(&mut b, class);

        b.push_line("using namespace node;")
            .push_line("using namespace v8;")
            .push_blank();

        self.class_body(&mut b, class);

        b.push_blank().push_line("#endif");

        debug!(class = %class.cpp_class_name, "rendered declaration");
        Ok(b.build())
    }

    fn includes(&self, b: &mut CodeBuilder, class: &ClassSpec) {
        b.push_line("#include <nan.h>")
            .push_line("#include <string>")
            .push_blank()
            .push_line("extern \"C\" {")
            .push_line(&format!("#include <{}>", self.library.header))
            .push_line("}")
            .push_blank();

        for dependency in &class.dependencies {
            b.push_line(&format!("#include \"{}\"", dependency));
        }
        b.push_blank();
    }

    fn forward_declaration(&self, b: &mut CodeBuilder, class: &ClassSpec) {
        let Some(c_type) = class.native_type().filter(|_| class.forward_declare) else {
            return;
        };

        b.push_comment("Forward declaration.")
            .push_line(&format!("struct {} {{", c_type))
            .push_indent();
        for field in class.emittable_fields() {
            b.push_line(&format!("{} {};", field.member_type(), field.member_name()));
        }
        b.push_dedent().push_line("};").push_blank();
    }

    fn class_body(&self, b: &mut CodeBuilder, class: &ClassSpec) {
        let name = &class.cpp_class_name;
        let c_type = class.native_type();

        b.push_line(&format!("class {} : public ObjectWrap {{", name))
            .push_indent()
            .push_line("public:")
            .push_indent()
            .push_line("static Persistent<Function> constructor_template;")
            .push_line("static void Initialize (Handle<v8::Object> target);");

        if let Some(c_type) = c_type {
            b.push_blank()
                .push_line(&format!("{} *GetValue();", c_type))
                .push_blank()
                .push_line("static Handle<Value> New(void *raw);");
        }

        b.push_dedent().push_blank().push_line("private:").push_indent();

        if let Some(c_type) = c_type {
            b.push_line(&format!("{}({} *raw);", name, c_type))
                .push_line(&format!("~{}();", name))
                .push_blank();
        }

        b.push_line("static NAN_METHOD(New);");

        let mut fields = class.emittable_fields().peekable();
        if fields.peek().is_some() {
            b.push_blank();
        }
        for accessor in fields.filter_map(|f| f.accessor_name()) {
            b.push_line(&format!("static NAN_METHOD({});", accessor));
        }

        let mut functions = class.emittable_functions().peekable();
        if functions.peek().is_some() {
            b.push_blank();
        }
        for function in functions {
            let Some(binding) = function.binding_name() else {
                continue;
            };
            trace!(class = %name, binding, is_async = function.is_async, "declaring binding");

            if function.is_async {
                b.push_blank()
                    .emit(&BatonStruct::new(binding, function, self.library))
                    .emit(&WorkerClass::new(binding));
            }
            b.push_line(&format!("static NAN_METHOD({});", binding));
        }

        if let Some(c_type) = c_type {
            b.push_blank().push_line(&format!("{} *raw;", c_type));
        }

        b.push_dedent().push_dedent().push_line("};");
    }
}
