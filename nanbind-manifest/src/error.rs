use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use nanbind_core::{is_cpp_keyword, validate_identifier};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// A manifest or descriptor file held for error reporting.
///
/// Every error raised while reading one file carries the same source, so
/// the errors are built here.
#[derive(Debug, Clone)]
pub struct Source {
    name: String,
    text: String,
}

impl Source {
    pub fn new(text: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// File name as shown in reports.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn named(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.text.clone())
    }

    /// The manifest is not valid TOML for [`crate::Manifest`].
    pub fn toml(&self, source: toml::de::Error) -> Box<Error> {
        Box::new(Error::Parse {
            span: source.span().map(SourceSpan::from),
            src: self.named(),
            source,
        })
    }

    /// A descriptor is not valid JSON for a class list.
    pub fn json(&self, source: serde_json::Error) -> Box<Error> {
        let span = byte_offset(&self.text, source.line(), source.column())
            .map(|at| SourceSpan::from((at, 0)));
        Box::new(Error::Descriptor {
            src: self.named(),
            span,
            source,
        })
    }

    pub fn invalid(&self, message: impl Into<String>) -> Box<Error> {
        self.invalid_at(message, None)
    }

    /// Like [`Source::invalid`], labelled at `span` when it was found.
    pub fn invalid_at(&self, message: impl Into<String>, span: Option<SourceSpan>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named(),
            span,
            message: message.into(),
        })
    }

    /// Reject `name` unless it can be spelled as a C++ identifier.
    ///
    /// `what` names the kind of thing being checked, e.g. `member in 'Repository'`.
    pub fn check_name(&self, name: &str, what: String, span: Option<SourceSpan>) -> Result<()> {
        if is_cpp_keyword(name) {
            return Err(Box::new(Error::ReservedWord {
                src: self.named(),
                span,
                name: name.to_string(),
                what,
            }));
        }
        match validate_identifier(name) {
            Some(reason) => Err(Box::new(Error::InvalidName {
                src: self.named(),
                span,
                name: name.to_string(),
                what,
                reason: reason.to_string(),
            })),
            None => Ok(()),
        }
    }

    /// `name` is bound twice in `class`; spans point at both bindings.
    pub fn duplicate(
        &self,
        name: &str,
        class: &str,
        [first, second]: [Option<SourceSpan>; 2],
    ) -> Box<Error> {
        Box::new(Error::DuplicateMember {
            src: self.named(),
            first,
            second,
            name: name.to_string(),
            class: class.to_string(),
        })
    }
}

/// serde_json reports 1-based line and column; miette wants a byte offset.
fn byte_offset(text: &str, line: usize, column: usize) -> Option<usize> {
    let skipped = line.checked_sub(1)?;
    let start: usize = text.split_inclusive('\n').take(skipped).map(str::len).sum();
    Some((start + column.saturating_sub(1)).min(text.len()))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the manifest path with '--config <path>'"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest")]
    #[diagnostic(code(nanbind::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse class descriptor")]
    #[diagnostic(
        code(nanbind::descriptor_error),
        help("a descriptor holds one class object or an array of class objects")
    )]
    Descriptor {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(nanbind::invalid_class))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' is a C++ reserved word and cannot name a {what}")]
    #[diagnostic(
        code(nanbind::reserved_word),
        help("binding names are usually capitalized, e.g. 'Delete' instead of 'delete'")
    )]
    ReservedWord {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved")]
        span: Option<SourceSpan>,
        name: String,
        what: String,
    },

    #[error("'{name}' cannot name a {what}")]
    #[diagnostic(
        code(nanbind::invalid_name),
        help("{reason}; names are letters, digits and underscores, not starting with a digit")
    )]
    InvalidName {
        #[source_code]
        src: NamedSource<String>,
        #[label("not an identifier")]
        span: Option<SourceSpan>,
        name: String,
        what: String,
        reason: String,
    },

    #[error("'{name}' is bound twice in class '{class}'")]
    #[diagnostic(
        code(nanbind::duplicate_member),
        help("accessors and functions of one class share a namespace; rename one of them")
    )]
    DuplicateMember {
        #[source_code]
        src: NamedSource<String>,
        #[label("first binding")]
        first: Option<SourceSpan>,
        #[label("second binding")]
        second: Option<SourceSpan>,
        name: String,
        class: String,
    },
}
