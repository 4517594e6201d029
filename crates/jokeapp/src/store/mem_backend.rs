use super::backend::{Document, DocumentBackend};
use crate::error::StorageError;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// In-memory document backend for testing.
///
/// Behaves like the file backend without touching the filesystem: a `None`
/// document plays the part of a missing or empty file. Uses `parking_lot`
/// mutexes so the backend can be shared across the async runtime.
#[derive(Debug, Default)]
pub struct MemBackend {
    document: Mutex<Option<Document>>,
    simulated_error: Mutex<Option<String>>,
    ignore_initialize: AtomicBool,
    initializations: AtomicUsize,
}

impl MemBackend {
    /// An initialized, empty document.
    pub fn new() -> Self {
        Self::with_document(Document::new())
    }

    pub fn with_document(document: Document) -> Self {
        Self {
            document: Mutex::new(Some(document)),
            ..Self::default()
        }
    }

    /// No document yet: the first access reports `Uninitialized`.
    pub fn uninitialized() -> Self {
        Self::default()
    }

    /// Make every operation fail with `message` (or succeed again with `None`).
    pub fn set_simulated_error(&self, message: Option<&str>) {
        *self.simulated_error.lock() = message.map(str::to_string);
    }

    /// Make `initialize` a no-op, so the document stays uninitialized.
    pub fn set_ignore_initialize(&self, ignore: bool) {
        self.ignore_initialize.store(ignore, Ordering::SeqCst);
    }

    /// How many times `initialize` has been called.
    pub fn initializations(&self) -> usize {
        self.initializations.load(Ordering::SeqCst)
    }

    /// The current document, `None` while uninitialized.
    pub fn snapshot(&self) -> Option<Document> {
        self.document.lock().clone()
    }

    fn check_simulated_error(&self) -> Result<(), StorageError> {
        match self.simulated_error.lock().as_ref() {
            Some(message) => Err(StorageError::Backend(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DocumentBackend for MemBackend {
    async fn load(&self) -> Result<Document, StorageError> {
        self.check_simulated_error()?;
        self.document
            .lock()
            .clone()
            .ok_or_else(|| StorageError::Uninitialized(format!("{} is empty", self.location())))
    }

    async fn save(&self, document: &Document) -> Result<(), StorageError> {
        self.check_simulated_error()?;
        *self.document.lock() = Some(document.clone());
        Ok(())
    }

    async fn initialize(&self) -> Result<(), StorageError> {
        self.check_simulated_error()?;
        self.initializations.fetch_add(1, Ordering::SeqCst);
        if !self.ignore_initialize.load(Ordering::SeqCst) {
            *self.document.lock() = Some(Document::new());
        }
        Ok(())
    }

    fn location(&self) -> String {
        "memory://store".to_string()
    }
}
