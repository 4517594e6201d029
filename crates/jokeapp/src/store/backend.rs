use crate::error::StorageError;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// The whole store file: item id → item, in insertion order.
pub type Document = Map<String, Value>;

/// Abstract interface for raw document I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while ItemStore handles the "what" (ids, self-healing, events).
#[async_trait]
pub trait DocumentBackend: Send + Sync {
    /// Load the full document.
    ///
    /// Must return [`StorageError::Uninitialized`] when there is no usable
    /// document yet (missing, empty or unparsable), and only then.
    async fn load(&self) -> Result<Document, StorageError>;

    /// Replace the full document.
    async fn save(&self, document: &Document) -> Result<(), StorageError>;

    /// Write an empty document (`{}`). Idempotent.
    async fn initialize(&self) -> Result<(), StorageError>;

    /// Human-readable location, for logs.
    fn location(&self) -> String;
}
