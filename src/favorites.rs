//! Locally persisted favorites.
//!
//! Favorites are an ordered, id-unique collection of [`RecipeSummary`]
//! entries kept in a named storage record, plus a second record for the
//! last-selected search mode. Persistence goes through the [`Storage`]
//! trait so the logic is testable without a real backend; [`FileStorage`]
//! is the production implementation and [`MemoryStorage`] backs tests.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};

use crate::client::types::RecipeSummary;
use crate::client::RecipeApi;

/// Record holding the JSON array of favorite entries.
pub const FAVORITES_RECORD: &str = "forkyFavorites";

/// Record holding the last-selected search mode string.
pub const MODE_RECORD: &str = "currentMode";

/// Named string records, the persistence seam for favorites and UI mode.
pub trait Storage {
    fn get(&self, record: &str) -> Result<Option<String>>;
    fn set(&self, record: &str, value: &str) -> Result<()>;
}

impl<T: Storage + ?Sized> Storage for &T {
    fn get(&self, record: &str) -> Result<Option<String>> {
        (**self).get(record)
    }

    fn set(&self, record: &str, value: &str) -> Result<()> {
        (**self).set(record, value)
    }
}

/// File-backed storage: a single JSON object, one property per record.
///
/// Every `set` rewrites the whole file in one write, so a record is either
/// fully updated or not at all. A missing or unreadable file reads as empty.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> BTreeMap<String, String> {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }
}

impl Storage for FileStorage {
    fn get(&self, record: &str) -> Result<Option<String>> {
        Ok(self.read_all().remove(record))
    }

    fn set(&self, record: &str, value: &str) -> Result<()> {
        let mut records = self.read_all();
        records.insert(record.to_string(), value.to_string());

        let body = serde_json::to_string_pretty(&records)?;
        fs::write(&self.path, body)
            .with_context(|| format!("failed to write storage file {}", self.path.display()))?;

        Ok(())
    }
}

/// In-memory storage for tests.
#[derive(Default)]
pub struct MemoryStorage {
    records: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, record: &str) -> Result<Option<String>> {
        Ok(self.records.lock().unwrap().get(record).cloned())
    }

    fn set(&self, record: &str, value: &str) -> Result<()> {
        self.records
            .lock()
            .unwrap()
            .insert(record.to_string(), value.to_string());
        Ok(())
    }
}

/// The saved-recipes collection, viewed through a storage backend.
///
/// Entries are unique by id and kept in insertion order, which is also the
/// display order.
pub struct Favorites<'a> {
    storage: &'a dyn Storage,
}

impl<'a> Favorites<'a> {
    pub fn new(storage: &'a dyn Storage) -> Self {
        Self { storage }
    }

    /// Returns the persisted collection. A missing or corrupt record reads
    /// as an empty list; it never fails the caller.
    pub fn list(&self) -> Vec<RecipeSummary> {
        match self.storage.get(FAVORITES_RECORD) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("discarding corrupt favorites record: {}", e);
                Vec::new()
            }),
            _ => Vec::new(),
        }
    }

    /// True iff an entry with this id is saved.
    pub fn is_favorite(&self, id: i64) -> bool {
        self.list().iter().any(|fav| fav.id == id)
    }

    /// Removes the recipe when present; otherwise fetches its detail through
    /// `api`, extracts a summary, and appends it. A failed fetch leaves the
    /// collection unchanged. Returns the recipe's new favorite state.
    pub async fn toggle(&self, id: i64, api: &RecipeApi) -> Result<bool> {
        let mut favorites = self.list();

        if let Some(pos) = favorites.iter().position(|fav| fav.id == id) {
            favorites.remove(pos);
            self.save(&favorites)?;
            tracing::info!("removed recipe {} from favorites", id);
            Ok(false)
        } else {
            let recipe = api
                .get_recipe(id)
                .await
                .with_context(|| format!("could not fetch recipe {} for saving", id))?;

            // Persist under the requested id even if upstream disagrees.
            favorites.push(RecipeSummary {
                id,
                title: recipe.title,
                image: recipe.image,
            });
            self.save(&favorites)?;
            tracing::info!("added recipe {} to favorites", id);
            Ok(true)
        }
    }

    /// Persists the whole collection in a single write.
    fn save(&self, favorites: &[RecipeSummary]) -> Result<()> {
        let body = serde_json::to_string(favorites)?;
        self.storage.set(FAVORITES_RECORD, &body)
    }
}
