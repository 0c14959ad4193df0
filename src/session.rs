//! Explicit UI state and the handlers that drive it.
//!
//! A [`Session`] owns everything the UI needs to draw: the active search
//! mode, the status line, the loading flag, the results grid, and the
//! detail overlay. Handlers take `&mut Session` and an API handle, so two
//! searches cannot overlap on one session; when separate sessions race,
//! last response wins. Persistence (favorites, last mode) goes through the
//! injected [`Storage`] backend.

use anyhow::Result;

use crate::client::RecipeApi;
use crate::favorites::{Favorites, Storage, MODE_RECORD};
use crate::render::{self, DetailView, RecipeCard};

/// Which search method is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    NameSearch,
    IngredientSearch,
}

impl Mode {
    fn as_record(self) -> &'static str {
        match self {
            Mode::NameSearch => "name",
            Mode::IngredientSearch => "ingredients",
        }
    }

    fn from_record(record: &str) -> Option<Mode> {
        match record {
            "name" => Some(Mode::NameSearch),
            "ingredients" => Some(Mode::IngredientSearch),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// The status line under the search controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

impl Status {
    fn info(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }
}

/// Content of the detail overlay, when visible.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    /// Shown immediately while the detail fetch is in flight.
    Loading,
    Detail(DetailView),
    Error(String),
}

/// Process-local UI state, restored from storage at startup.
pub struct Session<S: Storage> {
    storage: S,
    pub mode: Mode,
    pub status: Option<Status>,
    pub loading: bool,
    pub overlay: Option<Overlay>,
    pub cards: Vec<RecipeCard>,
}

impl<S: Storage> Session<S> {
    /// Starts a session, restoring the last persisted mode.
    pub fn new(storage: S) -> Self {
        let mode = storage
            .get(MODE_RECORD)
            .ok()
            .flatten()
            .and_then(|record| Mode::from_record(&record))
            .unwrap_or(Mode::NameSearch);

        Self {
            storage,
            mode,
            status: Some(Status::info(
                "Welcome to Forky! Start by searching for a recipe or ingredients.",
            )),
            loading: false,
            overlay: None,
            cards: Vec::new(),
        }
    }

    /// Switches the search mode, persisting the selection and clearing the
    /// status line.
    pub fn switch_mode(&mut self, mode: Mode) -> Result<()> {
        self.mode = mode;
        self.status = None;
        self.storage.set(MODE_RECORD, mode.as_record())
    }

    /// Name search. Queries shorter than 3 characters are rejected locally
    /// with a validation message and no network call.
    pub async fn search_by_name(&mut self, api: &RecipeApi, query: &str) {
        let query = query.trim();
        if query.chars().count() < 3 {
            self.status = Some(Status::error(
                "Please enter at least 3 characters for the recipe name.",
            ));
            return;
        }

        self.status = None;
        self.loading = true;
        self.cards.clear();

        match api.search_by_name(query).await {
            Ok(response) if response.results.is_empty() => {
                self.status = Some(Status::info(format!(
                    "No recipes found matching \"{}\". Try a different name.",
                    query
                )));
            }
            Ok(response) => {
                self.cards = render::render_cards(&response.results);
            }
            Err(e) => {
                tracing::error!("name search failed: {}", e);
                self.status = Some(Status::error("Error fetching recipes. Check proxy logs."));
            }
        }

        self.loading = false;
    }

    /// Ingredient search. Empty input is rejected locally with a validation
    /// message and no network call.
    pub async fn search_by_ingredients(&mut self, api: &RecipeApi, ingredients: &str) {
        let ingredients = ingredients.trim();
        if ingredients.is_empty() {
            self.status = Some(Status::error(
                "Please enter one or more ingredients separated by commas.",
            ));
            return;
        }

        self.status = None;
        self.loading = true;
        self.cards.clear();

        match api.search_by_ingredients(ingredients).await {
            Ok(results) if results.is_empty() => {
                self.status = Some(Status::info(
                    "No recipes found using those ingredients. Try fewer or different ones.",
                ));
            }
            Ok(results) => {
                self.cards = render::render_cards(&results);
            }
            Err(e) => {
                tracing::error!("ingredient search failed: {}", e);
                self.status = Some(Status::error("Error fetching recipes. Check proxy logs."));
            }
        }

        self.loading = false;
    }

    /// Opens the detail overlay for one recipe. The overlay shows a loading
    /// placeholder immediately, then the full detail or an error message.
    pub async fn show_recipe_details(&mut self, api: &RecipeApi, id: i64) {
        self.overlay = Some(Overlay::Loading);

        match api.get_recipe(id).await {
            Ok(recipe) => {
                let is_favorite = Favorites::new(&self.storage).is_favorite(recipe.id);
                self.overlay = Some(Overlay::Detail(render::render_detail(&recipe, is_favorite)));
            }
            Err(e) => {
                tracing::error!("detail fetch for recipe {} failed: {}", id, e);
                self.overlay = Some(Overlay::Error(
                    "Failed to load recipe details. Please ensure the API key is valid.".to_string(),
                ));
            }
        }
    }

    /// Closes the detail overlay and clears the status line.
    pub fn close_overlay(&mut self) {
        self.overlay = None;
        self.status = None;
    }

    /// Toggles the favorite state of one recipe. A failed save leaves the
    /// collection unchanged and reports a save error; on success the open
    /// detail view's favorite flag is updated in place.
    pub async fn toggle_favorite(&mut self, api: &RecipeApi, id: i64) {
        self.status = None;

        match Favorites::new(&self.storage).toggle(id, api).await {
            Ok(saved) => {
                self.status = Some(Status::info(if saved {
                    "Recipe added to favorites!"
                } else {
                    "Recipe removed from favorites."
                }));

                if let Some(Overlay::Detail(view)) = &mut self.overlay {
                    if view.id == id {
                        view.is_favorite = saved;
                    }
                }
            }
            Err(e) => {
                tracing::error!("could not save favorite {}: {}", id, e);
                self.status = Some(Status::error("Failed to save recipe. API fetch error."));
            }
        }
    }

    /// Shows the favorites collection as a result grid in the name-search
    /// view, or an empty-state message when nothing is saved.
    pub fn show_favorites(&mut self) -> Result<()> {
        self.switch_mode(Mode::NameSearch)?;

        let favorites = Favorites::new(&self.storage).list();
        if favorites.is_empty() {
            self.cards.clear();
            self.status = Some(Status::info("Your Favorites List is Empty"));
            return Ok(());
        }

        self.status = Some(Status::info(format!(
            "Displaying {} Favorite Recipes.",
            favorites.len()
        )));
        self.cards = render::render_cards(&favorites);
        Ok(())
    }

    /// True iff the recipe is currently saved as a favorite.
    pub fn is_favorite(&self, id: i64) -> bool {
        Favorites::new(&self.storage).is_favorite(id)
    }
}
