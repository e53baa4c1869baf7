use std::io::Write;
use std::path::Path;

use crate::error::{MetadataError, Result};
use crate::metadata::SourceMetadata;

impl SourceMetadata {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json_string(&self, pretty: bool) -> Result<String> {
        let text = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(text)
    }

    pub fn read_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| MetadataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let metadata = Self::from_json_str(&text)?;
        tracing::debug!(
            path = %path.display(),
            classes = metadata.classes.len(),
            "read metadata document"
        );
        Ok(metadata)
    }

    /// Serializes the whole document before touching the filesystem, then swaps the
    /// result into place so a failure never leaves a truncated file at `path`.
    pub fn write_to_path(&self, path: impl AsRef<Path>, pretty: bool) -> Result<()> {
        let path = path.as_ref();
        let text = self.to_json_string(pretty)?;

        let write_err = |source| MetadataError::Write {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(write_err)?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(text.as_bytes()).map_err(write_err)?;
        tmp.flush().map_err(write_err)?;
        tmp.persist(path).map_err(|err| write_err(err.error))?;

        tracing::debug!(path = %path.display(), bytes = text.len(), "wrote metadata document");
        Ok(())
    }
}
