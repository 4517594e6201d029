//! # Storage Layer
//!
//! [`ItemStore`] keeps typed items in a single JSON document, keyed by string
//! ids:
//!
//! ```text
//! {
//!   "joke-111": { "jokeId": "joke-111", "question": "...", "answer": "..." },
//!   "joke-222": { ... }
//! }
//! ```
//!
//! ## Ids
//!
//! Ids are non-empty and must not contain `/`, which is reserved as the path
//! separator of the document. See [`item_id`].
//!
//! ## Lazy Initialization
//!
//! There is no setup step. A missing, empty or unparsable file is reported by
//! the backend as [`StorageError::Uninitialized`](crate::error::StorageError);
//! the store then writes `{}` and retries the operation exactly once. Anything
//! that fails after that initialization is returned to the caller.
//!
//! A valid JSON document that is not an object is never overwritten; it is a
//! storage error.
//!
//! ## Reads and Writes
//!
//! - Every operation re-reads the whole document. Nothing is cached.
//! - Writes are a read-modify-write of the whole document, so two writers that
//!   interleave lose one update (last write wins).
//! - `get_item` on an unknown id returns `None`; `delete_item` on an unknown id
//!   does nothing. Neither is an error.
//! - Listing follows the order in which ids were first written; overwriting an
//!   item keeps its position.
//!
//! ## Events
//!
//! [`ItemStoreEvents`] exposes one emitter per event type. Events fire after the
//! write has reached the backend and before the call returns.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: the JSON file, written atomically.
//! - [`mem_backend::MemBackend`]: in memory, for tests and nullable wiring.

pub mod backend;
pub mod fs_backend;
pub mod item_id;
pub mod item_store;
pub mod mem_backend;

pub use backend::{Document, DocumentBackend};
pub use item_id::{assert_valid_id, ItemId};
pub use item_store::{ItemDeleted, ItemStore, ItemStoreEvents, ItemStored};
