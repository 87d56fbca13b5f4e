use std::path::{Path, PathBuf};

use eyre::Result;
use tracing::debug;

/// A file the generator owns, written relative to an output directory.
pub trait GeneratedFile {
    fn path(&self, base: &Path) -> PathBuf;

    fn overwrite(&self) -> Overwrite {
        Overwrite::default()
    }

    fn render(&self) -> Result<String>;

    /// Render and write, creating parent directories as needed.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        let content = self.render()?;

        if self.overwrite() == Overwrite::IfChanged
            && std::fs::read_to_string(&path).is_ok_and(|existing| existing == content)
        {
            debug!(path = %path.display(), "unchanged, skipping write");
            return Ok(WriteResult::Unchanged);
        }

        write_file(&path, &content)?;
        debug!(path = %path.display(), bytes = content.len(), "wrote file");
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// The file on disk already held the rendered content.
    Unchanged,
}

/// What to do when the target file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    Always,
    /// Leave the file alone when its content is already current
    #[default]
    IfChanged,
}
