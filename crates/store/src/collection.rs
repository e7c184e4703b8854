use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::error::StoreResult;

/// A persisted record addressable by its string id.
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// File stem of the backing collection, e.g. `bookings` for `bookings.json`.
    const COLLECTION: &'static str;

    fn id(&self) -> &str;
}

/// One JSON array persisted as a single file.
///
/// Every operation is a whole-file read-modify-write cycle held under the
/// collection's writer lock, so concurrent mutations of one collection are
/// serialized. There is no coordination across collections.
pub struct JsonCollection<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _marker: PhantomData<T>,
}

impl<T: Document> JsonCollection<T> {
    pub fn open(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(format!("{}.json", T::COLLECTION)),
            lock: Mutex::new(()),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn find_all(&self) -> StoreResult<Vec<T>> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    pub async fn find_by_id(&self, id: &str) -> StoreResult<Option<T>> {
        let _guard = self.lock.lock().await;
        let docs = self.load().await?;
        Ok(docs.into_iter().find(|doc| doc.id() == id))
    }

    pub async fn insert_one(&self, doc: &T) -> StoreResult<()> {
        let _guard = self.lock.lock().await;
        let mut docs = self.load().await?;
        docs.push(doc.clone());
        self.persist(&docs).await
    }

    /// Mutate the first document with the given id in place. Returns `false`
    /// without touching the file when no document matches.
    pub async fn update_by_id<F>(&self, id: &str, mutate: F) -> StoreResult<bool>
    where
        F: FnOnce(&mut T),
    {
        let _guard = self.lock.lock().await;
        let mut docs = self.load().await?;
        match docs.iter_mut().find(|doc| doc.id() == id) {
            Some(doc) => {
                mutate(doc);
                self.persist(&docs).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Overwrite the whole collection, e.g. when seeding.
    pub async fn replace_all(&self, docs: &[T]) -> StoreResult<()> {
        let _guard = self.lock.lock().await;
        self.persist(docs).await
    }

    /// A missing file reads as an empty collection (nothing seeded yet);
    /// unreadable or unparsable content is surfaced to the caller.
    async fn load(&self) -> StoreResult<Vec<T>> {
        if !fs::try_exists(&self.path).await? {
            warn!(path = %self.path.display(), "collection file not found, treating as empty");
            return Ok(Vec::new());
        }
        let json = fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&json)?)
    }

    async fn persist(&self, docs: &[T]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(docs)?;
        fs::write(&self.path, json).await?;
        debug!(path = %self.path.display(), count = docs.len(), "persisted collection");
        Ok(())
    }
}
