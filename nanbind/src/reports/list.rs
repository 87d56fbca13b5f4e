//! List command report data structures.

use super::output::{Output, Report};

/// Classes and the bindings each one exposes.
#[derive(Debug)]
pub struct ListReport {
    pub classes: Vec<ClassEntry>,
}

#[derive(Debug)]
pub struct ClassEntry {
    pub name: String,
    /// Name registered with the runtime.
    pub exported_name: String,
    pub c_type: Option<String>,
    pub file_stem: String,
    pub accessors: Vec<BindingEntry>,
    pub functions: Vec<BindingEntry>,
}

#[derive(Debug)]
pub struct BindingEntry {
    /// Wrapper method name.
    pub name: String,
    /// Name visible from script.
    pub js_name: String,
    pub is_async: bool,
    pub is_prototype: bool,
}

impl BindingEntry {
    fn describe(&self) -> String {
        let mut line = format!("{} -> {}", self.name, self.js_name);
        if !self.is_prototype {
            line.push_str(" [static]");
        }
        if self.is_async {
            line.push_str(" [async]");
        }
        line
    }
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.classes.is_empty() {
            out.preformatted("No classes defined");
            return;
        }

        for (i, class) in self.classes.iter().enumerate() {
            if i > 0 {
                out.newline();
            }

            let mut heading = class.name.clone();
            if class.exported_name != class.name {
                heading.push_str(&format!(" as {}", class.exported_name));
            }
            out.section(&heading);
            out.key_value(
                "  native type",
                class.c_type.as_deref().unwrap_or("(none)"),
            );
            out.key_value("  files", &format!("{0}.h, {0}.cc", class.file_stem));

            for accessor in &class.accessors {
                out.list_item(&accessor.describe());
            }
            for function in &class.functions {
                out.list_item(&function.describe());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_empty_list() {
        let mut out = RecordingOutput::default();
        ListReport { classes: vec![] }.render(&mut out);

        assert_eq!(out.lines, ["No classes defined"]);
    }

    #[test]
    fn test_list_marks_async_and_static() {
        let report = ListReport {
            classes: vec![ClassEntry {
                name: "Repository".into(),
                exported_name: "Repo".into(),
                c_type: Some("git_repository".into()),
                file_stem: "repository".into(),
                accessors: vec![],
                functions: vec![
                    BindingEntry {
                        name: "Open".into(),
                        js_name: "open".into(),
                        is_async: true,
                        is_prototype: false,
                    },
                    BindingEntry {
                        name: "Path".into(),
                        js_name: "path".into(),
                        is_async: false,
                        is_prototype: true,
                    },
                ],
            }],
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "Repository as Repo:",
                "  native type: git_repository",
                "  files: repository.h, repository.cc",
                "  - Open -> open [static] [async]",
                "  - Path -> path",
            ]
        );
    }
}
