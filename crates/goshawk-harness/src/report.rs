use crate::Result;
use mime::Mime;
use std::path::PathBuf;

/// Test-report collaborator: attaches a binary payload under a display name
/// and content type.
pub trait Reporter: Send + Sync {
    fn attach(&self, name: &str, content_type: &Mime, payload: &[u8]) -> Result<()>;
}

/// Writes attachments into a directory, one file per attachment.
pub struct FileReporter {
    dir: PathBuf,
}

impl FileReporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Reporter for FileReporter {
    fn attach(&self, name: &str, content_type: &Mime, payload: &[u8]) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;

        let file_name = format!("{}.{}", sanitize(name), content_type.subtype());
        let path = self.dir.join(file_name);
        std::fs::write(&path, payload)?;

        tracing::info!("Attached '{}' as {}", name, path.display());
        Ok(())
    }
}

// Display names come from scenario titles and can contain anything.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
