//! # Joke Repository
//!
//! [`JokeRepo`] is the typed facade over one [`ItemStore<Joke>`]. It adds no
//! storage logic of its own: lookups, ids and errors are the store's. What it
//! adds is domain vocabulary, both in method names and in the events it emits
//! ([`JokeAdded`], [`JokeRemoved`]).
//!
//! `remove` reports [`JokeRemoved`] whether or not the joke existed, because the
//! store treats removal of an unknown id as success.

use crate::error::Result;
use crate::events::EventEmitter;
use crate::model::{Joke, JokeId};
use crate::store::ItemStore;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokeAdded {
    pub joke: Joke,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokeRemoved {
    pub joke_id: JokeId,
}

#[derive(Debug, Default)]
pub struct JokeRepoEvents {
    pub joke_added: EventEmitter<JokeAdded>,
    pub joke_removed: EventEmitter<JokeRemoved>,
}

pub struct JokeRepo {
    store: ItemStore<Joke>,
    events: JokeRepoEvents,
}

impl JokeRepo {
    pub fn new(store: ItemStore<Joke>) -> Self {
        Self {
            store,
            events: JokeRepoEvents::default(),
        }
    }

    pub fn create(db_file: impl Into<PathBuf>) -> Self {
        Self::new(ItemStore::create(db_file))
    }

    /// An in-memory repository seeded with `jokes`.
    pub fn create_null<I>(jokes: I) -> Result<Self>
    where
        I: IntoIterator<Item = Joke>,
    {
        let items = jokes
            .into_iter()
            .map(|joke| (joke.joke_id.to_string(), joke));
        Ok(Self::new(ItemStore::create_null(items)?))
    }

    pub fn events(&self) -> &JokeRepoEvents {
        &self.events
    }

    pub fn store(&self) -> &ItemStore<Joke> {
        &self.store
    }

    pub async fn find_all(&self) -> Result<Vec<Joke>> {
        self.store.list_items().await
    }

    pub async fn find_by_joke_id(&self, joke_id: &JokeId) -> Result<Option<Joke>> {
        self.store.get_item(joke_id.as_str()).await
    }

    /// Insert or replace `joke`.
    pub async fn add(&self, joke: Joke) -> Result<()> {
        self.store
            .put_item(joke.joke_id.as_str(), joke.clone())
            .await?;
        info!(target: "jokeapp::repo", joke_id = %joke.joke_id, "Joke added");
        self.events.joke_added.emit(&JokeAdded { joke });
        Ok(())
    }

    pub async fn remove(&self, joke_id: &JokeId) -> Result<()> {
        self.store.delete_item(joke_id.as_str()).await?;
        info!(target: "jokeapp::repo", %joke_id, "Joke removed");
        self.events.joke_removed.emit(&JokeRemoved {
            joke_id: joke_id.clone(),
        });
        Ok(())
    }
}
