use crate::model::{Joke, JokeId};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A store file path inside a fresh temp dir. The file itself does not exist
/// until the store initializes it.
pub struct TempStoreFile {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    _temp_dir: TempDir,
    path: PathBuf,
}

impl Default for TempStoreFile {
    fn default() -> Self {
        Self::new()
    }
}

impl TempStoreFile {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("test.db");
        Self {
            _temp_dir: temp_dir,
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub fn create_joke(joke_id: &str) -> Joke {
    Joke::new(
        JokeId::new(joke_id).expect("factory joke id must not be empty"),
        "Some factory question",
        "Some factory answer",
    )
}
