use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileReadError {
  #[error("Unable to read file {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

/// Read the whole text of a file, returning its lines joined by `\n`.
///
/// Line endings are normalized, so `\r\n` becomes `\n` and a trailing line ending is dropped.
/// Any failure is returned to the caller, who decides whether an empty text is an acceptable fallback.
pub async fn read_whole_file<P>(path: P) -> Result<String, FileReadError>
where
  P: AsRef<Path>,
{
  let path = path.as_ref();
  match tokio::fs::read_to_string(path).await {
    Ok(content) => Ok(content.lines().collect::<Vec<&str>>().join("\n")),
    Err(source) => {
      log::debug!("Failed to read {}: {}", path.display(), source);
      Err(FileReadError::Read {
        path: path.to_path_buf(),
        source,
      })
    }
  }
}
