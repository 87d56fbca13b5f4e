//! Where reports go.

/// Which stream a line belongs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Out,
    Err,
}

/// Line sink for reports.
///
/// Only [`Output::line`] is required; the semantic helpers format their
/// text and hand it over one line at a time.
pub trait Output {
    /// Write one finished line.
    fn line(&mut self, stream: Stream, text: &str);

    fn section(&mut self, name: &str) {
        self.line(Stream::Out, &format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.line(Stream::Out, &format!("{}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.line(Stream::Out, &format!("  - {}", text));
    }

    /// A file that was written.
    fn added_item(&mut self, text: &str) {
        self.line(Stream::Out, &format!("  + {}", text));
    }

    fn error(&mut self, msg: &str) {
        self.line(Stream::Err, &format!("error: {}", msg));
    }

    fn warning(&mut self, msg: &str) {
        self.line(Stream::Err, &format!("warning: {}", msg));
    }

    /// A labelled rule, used between previewed files.
    fn divider(&mut self, label: &str) {
        self.line(Stream::Out, &format!("── {} ──", label));
    }

    /// Text passed through untouched, e.g. generated source.
    fn preformatted(&mut self, text: &str) {
        self.line(Stream::Out, text);
    }

    fn newline(&mut self) {
        self.line(Stream::Out, "");
    }
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Prints to stdout, with errors and warnings on stderr.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn line(&mut self, stream: Stream, text: &str) {
        match stream {
            Stream::Out => println!("{}", text),
            Stream::Err => eprintln!("{}", text),
        }
    }
}

/// Keeps every line so report tests can assert on them.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for RecordingOutput {
    fn line(&mut self, _stream: Stream, text: &str) {
        self.lines.push(text.to_string());
    }
}
