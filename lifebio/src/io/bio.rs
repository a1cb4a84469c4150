//! Access to the external bio field.
//!
//! The [`BioStore`] trait decouples the update cycle from where the field
//! actually lives. [`FileBio`] keeps it in a local file; a remote profile client
//! plugs in behind the same trait. Tests use an in-memory store.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, instrument};

/// Read/write access to a single length-capped text field.
pub trait BioStore {
    /// Current field contents. An unset field reads as an empty string.
    fn read_bio(&self) -> Result<String>;

    /// Replace the field contents.
    fn write_bio(&self, bio: &str) -> Result<()>;
}

/// Field stored as a UTF-8 text file.
#[derive(Debug, Clone)]
pub struct FileBio {
    path: PathBuf,
}

impl FileBio {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BioStore for FileBio {
    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn read_bio(&self) -> Result<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                debug!(chars = contents.chars().count(), "read bio file");
                Ok(contents.trim_end_matches(['\n', '\r']).to_string())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("bio file missing; treating as empty");
                Ok(String::new())
            }
            Err(err) => Err(err).with_context(|| format!("read {}", self.path.display())),
        }
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn write_bio(&self, bio: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        fs::write(&self.path, bio).with_context(|| format!("write {}", self.path.display()))?;
        debug!(chars = bio.chars().count(), "wrote bio file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = FileBio::new(temp.path().join("bio.txt"));
        assert_eq!(store.read_bio().expect("read"), "");
    }

    #[test]
    fn write_then_read_round_trips_and_drops_trailing_newline() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("state").join("bio.txt");
        let store = FileBio::new(&path);
        store.write_bio("■□■□").expect("write");
        assert_eq!(store.read_bio().expect("read"), "■□■□");

        fs::write(&path, "■□\n").expect("write with newline");
        assert_eq!(store.read_bio().expect("read"), "■□");
    }
}
