use crate::error::UploadError;
use std::path::{Path, PathBuf};

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// A file picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    path: PathBuf,
    name: String,
    size: u64,
    content_type: String,
}

impl SelectedFile {
    /// Select the regular file at `path`. The MIME type is guessed from the extension.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, UploadError> {
        let path = path.as_ref();

        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| UploadError::File(format!("{}: {}", path.display(), e)))?;
        if !metadata.is_file() {
            return Err(UploadError::File(format!(
                "{} is not a regular file",
                path.display()
            )));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| UploadError::File(format!("{} has no file name", path.display())))?;

        let content_type = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string();

        Ok(Self {
            path: path.to_path_buf(),
            name,
            size: metadata.len(),
            content_type,
        })
    }

    /// Override the guessed MIME type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }
}
