use super::backend::{Document, DocumentBackend};
use super::fs_backend::FsBackend;
use super::item_id::ItemId;
use super::mem_backend::MemBackend;
use crate::error::{Result, StorageError};
use crate::events::EventEmitter;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

/// Emitted after an item has been written.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStored<T> {
    pub id: ItemId,
    pub item: T,
}

/// Emitted after an existing item has been removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDeleted {
    pub id: ItemId,
}

pub struct ItemStoreEvents<T> {
    pub item_stored: EventEmitter<ItemStored<T>>,
    pub item_deleted: EventEmitter<ItemDeleted>,
}

impl<T> Default for ItemStoreEvents<T> {
    fn default() -> Self {
        Self {
            item_stored: EventEmitter::new(),
            item_deleted: EventEmitter::new(),
        }
    }
}

/// Typed items keyed by string ids, all kept in one document.
pub struct ItemStore<T> {
    backend: Arc<dyn DocumentBackend>,
    events: ItemStoreEvents<T>,
}

impl<T> ItemStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// A store backed by the JSON file at `db_file`. The file is created lazily.
    pub fn create(db_file: impl Into<PathBuf>) -> Self {
        Self::with_backend(Arc::new(FsBackend::new(db_file)))
    }

    pub fn with_backend(backend: Arc<dyn DocumentBackend>) -> Self {
        Self {
            backend,
            events: ItemStoreEvents::default(),
        }
    }

    /// An in-memory store seeded with `items`; never touches the filesystem.
    pub fn create_null<I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, T)>,
    {
        let mut document = Document::new();
        for (id, item) in items {
            let id = ItemId::try_from(id.as_str())?;
            document.insert(id.to_string(), serde_json::to_value(&item)?);
        }
        Ok(Self::with_backend(Arc::new(MemBackend::with_document(
            document,
        ))))
    }

    pub fn events(&self) -> &ItemStoreEvents<T> {
        &self.events
    }

    /// All items, in the order their ids were first written.
    pub async fn list_items(&self) -> Result<Vec<T>> {
        let document = self.load_document().await?;
        debug!(target: "jokeapp::store", count = document.len(), "Listing items");
        document
            .into_iter()
            .map(|(_, value)| -> Result<T> { Ok(serde_json::from_value(value)?) })
            .collect()
    }

    pub async fn get_item(&self, id: &str) -> Result<Option<T>> {
        let id = ItemId::try_from(id)?;
        let mut document = self.load_document().await?;

        match document.shift_remove(id.as_str()) {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => {
                debug!(target: "jokeapp::store", %id, "Item not found");
                Ok(None)
            }
        }
    }

    /// Store `item` under `id`, replacing (not merging) any previous value.
    pub async fn put_item(&self, id: &str, item: T) -> Result<()> {
        let id = ItemId::try_from(id)?;
        let value = serde_json::to_value(&item)?;

        let mut document = self.load_document().await?;
        document.insert(id.to_string(), value);
        self.backend.save(&document).await?;

        debug!(target: "jokeapp::store", %id, "Item stored");
        self.events.item_stored.emit(&ItemStored { id, item });
        Ok(())
    }

    /// Remove the item under `id`. Removing an unknown id is a no-op.
    pub async fn delete_item(&self, id: &str) -> Result<()> {
        let id = ItemId::try_from(id)?;

        let mut document = self.load_document().await?;
        if document.shift_remove(id.as_str()).is_none() {
            debug!(target: "jokeapp::store", %id, "Nothing to delete");
            return Ok(());
        }
        self.backend.save(&document).await?;

        debug!(target: "jokeapp::store", %id, "Item deleted");
        self.events.item_deleted.emit(&ItemDeleted { id });
        Ok(())
    }

    /// Load the document, initializing it once if the backend has none yet.
    /// A failure after the initialization is final.
    async fn load_document(&self) -> Result<Document> {
        match self.backend.load().await {
            Err(StorageError::Uninitialized(reason)) => {
                warn!(
                    target: "jokeapp::store",
                    location = %self.backend.location(),
                    %reason,
                    "Store not initialized, writing an empty document"
                );
                self.backend.initialize().await?;
                Ok(self.backend.load().await?)
            }
            result => Ok(result?),
        }
    }
}
