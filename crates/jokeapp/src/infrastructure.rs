use crate::ids::{NullUuid, UuidGenerator};
use crate::repo::JokeRepo;
use crate::store::mem_backend::MemBackend;
use crate::store::ItemStore;
use std::path::PathBuf;
use std::sync::Arc;

/// Everything a request handler may talk to.
#[derive(Clone)]
pub struct Infrastructure {
    pub uuid: Arc<UuidGenerator>,
    pub joke_repo: Arc<JokeRepo>,
}

impl Infrastructure {
    /// Production wiring: random ids, jokes in the JSON file at `db_file`.
    pub fn create(db_file: impl Into<PathBuf>) -> Self {
        Self {
            uuid: Arc::new(UuidGenerator::create()),
            joke_repo: Arc::new(JokeRepo::create(db_file)),
        }
    }

    /// Test wiring: nil uuids and an empty in-memory repository.
    /// Override either part with [`with_uuid`](Self::with_uuid) /
    /// [`with_joke_repo`](Self::with_joke_repo).
    pub fn create_null() -> Self {
        let store = ItemStore::with_backend(Arc::new(MemBackend::new()));
        Self {
            uuid: Arc::new(UuidGenerator::create_null(NullUuid::Default)),
            joke_repo: Arc::new(JokeRepo::new(store)),
        }
    }

    pub fn with_uuid(mut self, uuid: UuidGenerator) -> Self {
        self.uuid = Arc::new(uuid);
        self
    }

    pub fn with_joke_repo(mut self, joke_repo: JokeRepo) -> Self {
        self.joke_repo = Arc::new(joke_repo);
        self
    }
}
