/// A piece of generated code, indentation left to the builder.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    Line(String),
    Blank,
    /// `open`, then `body` one level deeper, then `close`.
    Block {
        open: String,
        body: Vec<CodeFragment>,
        close: String,
    },
    /// `body` one level deeper, with no surrounding lines.
    Indent(Vec<CodeFragment>),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    pub fn block(
        open: impl Into<String>,
        body: Vec<CodeFragment>,
        close: impl Into<String>,
    ) -> Self {
        Self::Block {
            open: open.into(),
            body,
            close: close.into(),
        }
    }

    pub fn indent(body: Vec<CodeFragment>) -> Self {
        Self::Indent(body)
    }
}

/// Something that lays itself out as fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl Renderable for Vec<CodeFragment> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.clone()
    }
}
