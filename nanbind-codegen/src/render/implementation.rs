//! The `.cc` implementation surface of a wrapper class.
//!
//! Shares the model and the emission guards with the declaration surface:
//! every method declared there is defined here, and nothing else is.

use nanbind_core::{is_pointer, to_snake_case};
use nanbind_ir::{ArgSpec, ClassSpec, FieldSpec, FunctionSpec, NativeLibrary};
use tracing::{debug, trace};

use super::{
    ClassRegistry, baton_member_type, check_class,
    convert::{argument_check, is_duplicated, is_wrapped, unwrap_argument, wrap_value},
    scaffold::{baton_name, worker_name},
};
use crate::{
    builder::CodeBuilder,
    error::{RenderError, RenderResult},
    naming::{field_js_name, file_stem, function_js_name},
};

/// Render the implementation surface against the default (libgit2) library,
/// resolving wrapped types against `class` alone.
pub fn render_implementation(class: &ClassSpec) -> RenderResult<String> {
    let library = NativeLibrary::default();
    let registry = ClassRegistry::new([class]);
    ImplementationRenderer::new(&library, &registry).render(class)
}

/// Renders wrapper class definitions for one native library.
pub struct ImplementationRenderer<'a> {
    library: &'a NativeLibrary,
    registry: &'a ClassRegistry,
    header_include: Option<String>,
}

impl<'a> ImplementationRenderer<'a> {
    pub fn new(library: &'a NativeLibrary, registry: &'a ClassRegistry) -> Self {
        Self {
            library,
            registry,
            header_include: None,
        }
    }

    /// Override how the class header is included (default `../include/<stem>.h`).
    pub fn header_include(mut self, path: impl Into<String>) -> Self {
        self.header_include = Some(path.into());
        self
    }

    /// Render the full implementation for `class`.
    pub fn render(&self, class: &ClassSpec) -> RenderResult<String> {
        check_class(class)?;
        check_implementable(class)?;

        let mut b = CodeBuilder::cpp();
        self.includes(&mut b, class);
        b.push_line("using namespace v8;")
            .push_line("using namespace node;")
            .push_blank();

        if let Some(c_type) = class.native_type() {
            self.lifecycle(&mut b, class, c_type);
        }
        self.initialize(&mut b, class);
        self.constructors(&mut b, class);

        for field in class.emittable_fields() {
            self.accessor(&mut b, class, field);
        }

        for function in class.emittable_functions() {
            let (Some(binding), Some(native)) =
                (function.binding_name(), function.c_function_name.as_deref())
            else {
                continue;
            };
            trace!(class = %class.cpp_class_name, binding, native, "defining binding");

            let call = Call {
                class,
                function,
                binding,
                native,
            };
            if function.is_async {
                self.async_binding(&mut b, &call);
                self.execute(&mut b, &call);
                self.handle_ok_callback(&mut b, &call);
            } else {
                self.sync_binding(&mut b, &call);
            }
        }

        b.push_line(&format!(
            "Persistent<Function> {}::constructor_template;",
            class.cpp_class_name
        ));

        debug!(class = %class.cpp_class_name, "rendered implementation");
        Ok(b.build())
    }

    fn includes(&self, b: &mut CodeBuilder, class: &ClassSpec) {
        let header = match &self.header_include {
            Some(path) => path.clone(),
            None => format!("../include/{}.h", file_stem(class)),
        };

        b.push_line("#include <nan.h>")
            .push_line("#include <string.h>")
            .push_line("#include <stdlib.h>")
            .push_blank()
            .push_line("extern \"C\" {")
            .push_line(&format!("#include <{}>", self.library.header))
            .push_line("}")
            .push_blank()
            .push_line(&format!("#include \"{}\"", header));

        if let Some(extra) = &self.library.impl_include {
            b.push_line(&format!("#include \"{}\"", extra));
        }
        for dependency in &class.dependencies {
            b.push_line(&format!("#include \"{}\"", dependency));
        }
        b.push_blank();
    }

    fn lifecycle(&self, b: &mut CodeBuilder, class: &ClassSpec, c_type: &str) {
        let name = &class.cpp_class_name;

        b.push_line(&format!("{}::{}({} *raw) {{", name, name, c_type))
            .push_indent()
            .push_line("this->raw = raw;")
            .push_dedent()
            .push_line("}")
            .push_blank();

        match class.free_function_name.as_deref().filter(|f| !f.is_empty()) {
            Some(free) => {
                b.push_line(&format!("{}::~{}() {{", name, name))
                    .push_indent()
                    .push_line(&format!("{}(this->raw);", free))
                    .push_dedent()
                    .push_line("}");
            }
            None => {
                b.push_line(&format!("{}::~{}() {{}}", name, name));
            }
        }
        b.push_blank();
    }

    fn initialize(&self, b: &mut CodeBuilder, class: &ClassSpec) {
        let exported = class.exported_name();

        b.push_line(&format!(
            "void {}::Initialize(Handle<v8::Object> target) {{",
            class.cpp_class_name
        ))
        .push_indent()
        .push_line("NanScope();")
        .push_blank()
        .push_line("Local<FunctionTemplate> tpl = NanNew<FunctionTemplate>(New);")
        .push_blank()
        .push_line("tpl->InstanceTemplate()->SetInternalFieldCount(1);")
        .push_line(&format!(
            "tpl->SetClassName(NanNew<String>(\"{}\"));",
            exported
        ))
        .push_blank();

        for field in class.emittable_fields() {
            if let Some(accessor) = field.accessor_name() {
                b.push_line(&format!(
                    "NODE_SET_PROTOTYPE_METHOD(tpl, \"{}\", {});",
                    field_js_name(field),
                    accessor
                ));
            }
        }
        for function in class.emittable_functions() {
            let Some(binding) = function.binding_name() else {
                continue;
            };
            let register = if function.is_prototype_method {
                "NODE_SET_PROTOTYPE_METHOD"
            } else {
                "NODE_SET_METHOD"
            };
            b.push_line(&format!(
                "{}(tpl, \"{}\", {});",
                register,
                function_js_name(function),
                binding
            ));
        }

        b.push_blank()
            .push_line("Local<Function> _constructor_template = tpl->GetFunction();")
            .push_line("NanAssignPersistent(constructor_template, _constructor_template);")
            .push_line(&format!(
                "target->Set(NanNew<String>(\"{}\"), _constructor_template);",
                exported
            ))
            .push_dedent()
            .push_line("}")
            .push_blank();
    }

    fn constructors(&self, b: &mut CodeBuilder, class: &ClassSpec) {
        let name = &class.cpp_class_name;

        b.push_line(&format!("NAN_METHOD({}::New) {{", name))
            .push_indent()
            .push_line("NanScope();")
            .push_blank();

        match class.native_type() {
            Some(c_type) => {
                b.push_line("if (args.Length() == 0 || !args[0]->IsExternal()) {")
                    .push_indent()
                    .push_line(&format!("return NanThrowError(\"{} is required.\");", c_type))
                    .push_dedent()
                    .push_line("}")
                    .push_blank()
                    .push_line(&format!(
                        "{}* object = new {}(static_cast<{} *>(Handle<External>::Cast(args[0])->Value()));",
                        name, name, c_type
                    ));
            }
            None => {
                b.push_line(&format!("{}* object = new {}();", name, name));
            }
        }

        b.push_line("object->Wrap(args.This());")
            .push_blank()
            .push_line("NanReturnValue(args.This());")
            .push_dedent()
            .push_line("}")
            .push_blank();

        let Some(c_type) = class.native_type() else {
            return;
        };

        b.push_line(&format!("Handle<Value> {}::New(void *raw) {{", name))
            .push_indent()
            .push_line("NanEscapableScope();")
            .push_line("Handle<Value> argv[1] = { NanNew<External>((void *)raw) };")
            .push_line(&format!(
                "return NanEscapeScope(NanNew<Function>({}::constructor_template)->NewInstance(1, argv));",
                name
            ))
            .push_dedent()
            .push_line("}")
            .push_blank()
            .push_line(&format!("{} *{}::GetValue() {{", c_type, name))
            .push_indent()
            .push_line("return this->raw;")
            .push_dedent()
            .push_line("}")
            .push_blank();
    }

    fn accessor(&self, b: &mut CodeBuilder, class: &ClassSpec, field: &FieldSpec) {
        let Some(accessor) = field.accessor_name() else {
            return;
        };
        let local = to_snake_case(&field.name);

        b.push_line(&format!("NAN_METHOD({}::{}) {{", class.cpp_class_name, accessor))
            .push_indent()
            .push_line("NanScope();")
            .push_line("Handle<Value> to;")
            .push_blank()
            .push_line(&format!("{} {} =", field.c_type, local))
            .push_indent()
            .push_line(&format!(
                "ObjectWrap::Unwrap<{}>(args.This())->GetValue()->{};",
                class.cpp_class_name,
                field.member_name()
            ))
            .push_dedent()
            .push_blank()
            .emit(&wrap_value(&local, &field.c_type, &local, "to", self.registry))
            .push_line("NanReturnValue(to);")
            .push_dedent()
            .push_line("}")
            .push_blank();
    }

    fn sync_binding(&self, b: &mut CodeBuilder, call: &Call<'_>) {
        let function = call.function;

        b.push_line(&format!(
            "NAN_METHOD({}::{}) {{",
            call.class.cpp_class_name, call.binding
        ))
        .push_indent()
        .push_line("NanScope();")
        .push_blank();

        self.argument_checks(b, function);

        for (index, arg) in function.input_args().enumerate() {
            b.emit(&unwrap_argument(arg, index, self.registry));
        }
        for arg in function.return_args() {
            let ty = baton_member_type(arg);
            if is_pointer(&ty) {
                b.push_line(&format!("{} {} = 0;", ty, arg.name));
            } else {
                b.push_line(&format!("{} {};", ty, arg.name));
            }
        }

        let args = function
            .args
            .iter()
            .map(|arg| self.sync_call_arg(call.class, arg))
            .collect::<Vec<_>>()
            .join(", ");
        match &function.return_type {
            Some(ret) if function.returns_error_code() || function.returns_value() => {
                b.push_line(&format!("{} result = {}({});", ret.c_type, call.native, args));
            }
            _ => {
                b.push_line(&format!("{}({});", call.native, args));
            }
        }

        for arg in function.input_args().filter(|a| is_duplicated(a, self.registry)) {
            b.push_line(&format!("free((void *)from_{});", arg.name));
        }
        b.push_blank();

        if function.returns_error_code() {
            let last_error = &self.library.last_error;
            b.push_line(&format!("if (result != {}) {{", self.library.ok_code))
                .push_indent()
                .push_line(&format!("if ({}) {{", last_error))
                .push_indent()
                .push_line(&format!("return NanThrowError({}->message);", last_error))
                .push_dedent()
                .push_line("} else {")
                .push_indent()
                .push_line("return NanThrowError(\"Unknown Error\");")
                .push_dedent()
                .push_line("}")
                .push_dedent()
                .push_line("}")
                .push_blank();
        }

        let results = results(function);
        match results.as_slice() {
            [] => {
                b.push_line("NanReturnUndefined();");
            }
            [(name, ty, value)] => {
                b.push_line("Handle<Value> to;")
                    .emit(&wrap_value(value, ty, name, "to", self.registry))
                    .push_line("NanReturnValue(to);");
            }
            _ => {
                b.push_line("Handle<Value> to;")
                    .push_line("Handle<Object> toReturn = NanNew<Object>();");
                for (name, ty, value) in &results {
                    b.emit(&wrap_value(value, ty, name, "to", self.registry))
                        .push_line(&format!(
                            "toReturn->Set(NanNew<String>(\"{}\"), to);",
                            name
                        ));
                }
                b.push_line("NanReturnValue(toReturn);");
            }
        }

        b.push_dedent().push_line("}").push_blank();
    }

    fn async_binding(&self, b: &mut CodeBuilder, call: &Call<'_>) {
        let function = call.function;
        let baton = baton_name(call.binding);
        let worker = worker_name(call.binding);
        let inputs = function.input_args().count();

        b.push_line(&format!(
            "NAN_METHOD({}::{}) {{",
            call.class.cpp_class_name, call.binding
        ))
        .push_indent()
        .push_line("NanScope();")
        .push_blank();

        self.argument_checks(b, function);
        b.push_line(&format!(
            "if (args.Length() == {} || !args[{}]->IsFunction()) {{",
            inputs, inputs
        ))
        .push_indent()
        .push_line("return NanThrowError(\"Callback is required and must be a Function.\");")
        .push_dedent()
        .push_line("}")
        .push_blank()
        .push_line(&format!("{}* baton = new {};", baton, baton))
        .push_blank()
        .push_line(&format!("baton->error_code = {};", self.library.ok_code))
        .push_line("baton->error = NULL;")
        .push_blank();

        for (index, arg) in function.input_args().enumerate() {
            b.emit(&unwrap_argument(arg, index, self.registry))
                .push_line(&format!("baton->{} = from_{};", arg.name, arg.name));
        }
        for arg in function.args.iter().filter(|a| a.is_receiver()) {
            b.push_line(&format!(
                "baton->{} = {};",
                arg.name,
                self_value(call.class)
            ));
        }

        b.push_blank()
            .push_line(&format!(
                "NanCallback *callback = new NanCallback(Local<Function>::Cast(args[{}]));",
                inputs
            ))
            .push_line(&format!(
                "{} *worker = new {}(baton, callback);",
                worker, worker
            ));

        for arg in function.args.iter().filter(|a| a.is_receiver()) {
            b.push_line(&format!(
                "worker->SaveToPersistent(\"{}\", args.This());",
                arg.name
            ));
        }
        for (index, arg) in function.input_args().enumerate() {
            if is_wrapped(arg, self.registry) {
                b.push_line(&format!(
                    "worker->SaveToPersistent(\"{}\", args[{}]->ToObject());",
                    arg.name, index
                ));
            }
        }

        b.push_blank()
            .push_line("NanAsyncQueueWorker(worker);")
            .push_line("NanReturnUndefined();")
            .push_dedent()
            .push_line("}")
            .push_blank();
    }

    /// Phase one: the native call alone, off the caller's thread.
    fn execute(&self, b: &mut CodeBuilder, call: &Call<'_>) {
        let function = call.function;
        let args = function
            .args
            .iter()
            .map(|arg| {
                if arg.is_return {
                    format!("&baton->{}", arg.name)
                } else {
                    format!("baton->{}", arg.name)
                }
            })
            .collect::<Vec<_>>()
            .join(", ");

        b.push_line(&format!(
            "void {}::{}::Execute() {{",
            call.class.cpp_class_name,
            worker_name(call.binding)
        ))
        .push_indent();

        if function.returns_error_code() {
            let last_error = &self.library.last_error;
            b.push_line(&format!("int result = {}({});", call.native, args))
                .push_line("baton->error_code = result;")
                .push_blank()
                .push_line(&format!(
                    "if (result != {} && {} != NULL) {{",
                    self.library.ok_code, last_error
                ))
                .push_indent()
                .push_line(&format!(
                    "baton->error = {}({});",
                    self.library.error_dup, last_error
                ))
                .push_dedent()
                .push_line("}");
        } else {
            b.push_line(&format!("{}({});", call.native, args));
        }

        b.push_dedent().push_line("}").push_blank();
    }

    /// Phase two: back on the caller's thread, materialize results or the error.
    fn handle_ok_callback(&self, b: &mut CodeBuilder, call: &Call<'_>) {
        let function = call.function;

        b.push_line(&format!(
            "void {}::{}::HandleOKCallback() {{",
            call.class.cpp_class_name,
            worker_name(call.binding)
        ))
        .push_indent()
        .push_line("TryCatch try_catch;")
        .push_blank()
        .push_line(&format!("if (baton->error_code == {}) {{", self.library.ok_code))
        .push_indent();

        let slots: Vec<_> = function
            .return_args()
            .map(|arg| (arg, format!("baton->{}", arg.name)))
            .collect();
        match slots.as_slice() {
            [] => {
                b.push_line("Handle<Value> result = NanUndefined();");
            }
            [(arg, value)] => {
                b.push_line("Handle<Value> to;")
                    .emit(&wrap_value(
                        value,
                        &baton_member_type(arg),
                        &arg.name,
                        "to",
                        self.registry,
                    ))
                    .push_line("Handle<Value> result = to;");
            }
            _ => {
                b.push_line("Handle<Value> to;")
                    .push_line("Handle<Object> result = NanNew<Object>();");
                for (arg, value) in &slots {
                    b.emit(&wrap_value(
                        value,
                        &baton_member_type(arg),
                        &arg.name,
                        "to",
                        self.registry,
                    ))
                    .push_line(&format!(
                        "result->Set(NanNew<String>(\"{}\"), to);",
                        arg.name
                    ));
                }
            }
        }

        b.push_line("Handle<Value> argv[2] = {")
            .push_indent()
            .push_line("NanNull(),")
            .push_line("result")
            .push_dedent()
            .push_line("};")
            .push_line("callback->Call(2, argv);")
            .push_dedent()
            .push_line("} else {")
            .push_indent()
            .push_line("if (baton->error) {")
            .push_indent()
            .push_line("Handle<Value> argv[1] = {")
            .push_indent()
            .push_line("NanError(baton->error->message)")
            .push_dedent()
            .push_line("};")
            .push_line("callback->Call(1, argv);")
            .push_line("if (baton->error->message) {")
            .push_indent()
            .push_line("free((void *)baton->error->message);")
            .push_dedent()
            .push_line("}")
            .push_line("free((void *)baton->error);")
            .push_dedent()
            .push_line("} else {")
            .push_indent()
            .push_line("callback->Call(0, NULL);")
            .push_dedent()
            .push_line("}")
            .push_dedent()
            .push_line("}")
            .push_blank()
            .push_line("if (try_catch.HasCaught()) {")
            .push_indent()
            .push_line("node::FatalException(try_catch);")
            .push_dedent()
            .push_line("}")
            .push_blank();

        for arg in function.input_args().filter(|a| is_duplicated(a, self.registry)) {
            b.push_line(&format!("free((void *)baton->{});", arg.name));
        }
        b.push_line("delete baton;")
            .push_dedent()
            .push_line("}")
            .push_blank();
    }

    fn argument_checks(&self, b: &mut CodeBuilder, function: &FunctionSpec) {
        for (index, arg) in function.input_args().enumerate() {
            b.emit(&argument_check(arg, index, self.registry)).push_blank();
        }
    }

    fn sync_call_arg(&self, class: &ClassSpec, arg: &ArgSpec) -> String {
        if arg.is_return {
            format!("&{}", arg.name)
        } else if arg.is_receiver() {
            self_value(class)
        } else {
            format!("from_{}", arg.name)
        }
    }
}

/// One function binding being defined.
struct Call<'a> {
    class: &'a ClassSpec,
    function: &'a FunctionSpec,
    binding: &'a str,
    native: &'a str,
}

fn self_value(class: &ClassSpec) -> String {
    format!(
        "ObjectWrap::Unwrap<{}>(args.This())->GetValue()",
        class.cpp_class_name
    )
}

/// Values a synchronous binding hands back: `(name, type, expression)`.
fn results(function: &FunctionSpec) -> Vec<(String, String, String)> {
    let mut results: Vec<_> = function
        .return_args()
        .map(|arg| (arg.name.clone(), baton_member_type(arg), arg.name.clone()))
        .collect();
    if let Some(ret) = function.return_type.as_ref().filter(|_| function.returns_value()) {
        results.push(("result".into(), ret.c_type.clone(), "result".into()));
    }
    results
}

/// Checks only the implementation surface needs.
fn check_implementable(class: &ClassSpec) -> RenderResult<()> {
    if !class.has_native_type() {
        if let Some(field) = class.emittable_fields().next() {
            return Err(RenderError::AccessorWithoutNativeType {
                class: class.cpp_class_name.clone(),
                name: field.accessor_name().unwrap_or_default().to_string(),
            });
        }
    }

    let missing = class.emittable_functions().find(|f| {
        f.c_function_name
            .as_deref()
            .is_none_or(|native| native.trim().is_empty())
    });
    if let Some(function) = missing {
        return Err(RenderError::MissingNativeFunction {
            class: class.cpp_class_name.clone(),
            name: function.binding_name().unwrap_or_default().to_string(),
        });
    }

    Ok(())
}
