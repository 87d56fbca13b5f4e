use super::{CodeFragment, Renderable};

/// Two spaces, the indentation of every emitted C++ source.
const INDENT: &str = "  ";

/// Accumulates lines of C++ at a tracked indentation depth.
///
/// ```
/// use nanbind_codegen::builder::CodeBuilder;
///
/// let mut b = CodeBuilder::cpp();
/// b.push_line("struct git_oid {")
///     .push_indent()
///     .push_line("unsigned char id[20];")
///     .push_dedent()
///     .push_line("};");
///
/// assert_eq!(b.build(), "struct git_oid {\n  unsigned char id[20];\n};\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    depth: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn cpp() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(&INDENT.repeat(self.depth));
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line. Never leads the output and never doubles up.
    pub fn push_blank(&mut self) -> &mut Self {
        if !self.buffer.is_empty() && !self.buffer.ends_with("\n\n") {
            self.buffer.push('\n');
        }
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.push_line(&format!("// {}", text))
    }

    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.push_fragment(&fragment);
        }
        self
    }

    fn push_fragment(&mut self, fragment: &CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block { open, body, close } => {
                self.push_line(open);
                self.push_nested(body);
                self.push_line(close);
            }
            CodeFragment::Indent(body) => self.push_nested(body),
        }
    }

    fn push_nested(&mut self, body: &[CodeFragment]) {
        self.depth += 1;
        for fragment in body {
            self.push_fragment(fragment);
        }
        self.push_dedent();
    }

    pub fn build(self) -> String {
        self.buffer
    }
}
