use super::backend::{Document, DocumentBackend};
use crate::error::StorageError;
use async_trait::async_trait;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

/// The production backend: one JSON file holding the whole document.
#[derive(Debug, Clone)]
pub struct FsBackend {
    db_file: PathBuf,
}

impl FsBackend {
    pub fn new(db_file: impl Into<PathBuf>) -> Self {
        Self {
            db_file: db_file.into(),
        }
    }

    pub fn db_file(&self) -> &Path {
        &self.db_file
    }

    fn parse(&self, content: &str) -> Result<Document, StorageError> {
        if content.trim().is_empty() {
            return Err(StorageError::Uninitialized(format!(
                "{} is empty",
                self.location()
            )));
        }
        let value: Value = serde_json::from_str(content).map_err(|e| {
            StorageError::Uninitialized(format!("{} is not valid JSON: {}", self.location(), e))
        })?;
        match value {
            Value::Object(document) => Ok(document),
            _ => Err(StorageError::NotAnObject(self.db_file.clone())),
        }
    }

    async fn write_atomic(&self, content: &str) -> Result<(), StorageError> {
        let dir = match self.db_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).await?;

        let file_name = self
            .db_file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "store".to_string());
        let tmp_file = dir.join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));

        fs::write(&tmp_file, content).await?;
        if let Err(e) = fs::rename(&tmp_file, &self.db_file).await {
            let _ = fs::remove_file(&tmp_file).await;
            return Err(StorageError::Io(e));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentBackend for FsBackend {
    async fn load(&self) -> Result<Document, StorageError> {
        match fs::read_to_string(&self.db_file).await {
            Ok(content) => self.parse(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StorageError::Uninitialized(
                format!("{} does not exist", self.location()),
            )),
            Err(e) if e.kind() == ErrorKind::InvalidData => Err(StorageError::Uninitialized(
                format!("{} is not valid UTF-8", self.location()),
            )),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    async fn save(&self, document: &Document) -> Result<(), StorageError> {
        let content = serde_json::to_string(document)?;
        self.write_atomic(&content).await
    }

    async fn initialize(&self) -> Result<(), StorageError> {
        self.write_atomic("{}").await
    }

    fn location(&self) -> String {
        self.db_file.display().to_string()
    }
}
