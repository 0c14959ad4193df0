//! Type definitions for the Spoonacular wire format, as relayed by the proxy.
//!
//! ## Key Types
//!
//! - [`RecipeSummary`] - Search hit and favorite entry (id, title, image)
//! - [`RecipeDetail`] - Full recipe with ingredients and instructions
//! - [`SearchResponse`] - Wrapper for name-search results
//!
//! ## API Compatibility
//!
//! Name search (`complexSearch`) wraps its hits in a `results` array, while
//! ingredient search (`findByIngredients`) returns a bare array of the same
//! summary shape. Unknown upstream fields are ignored on deserialize, and
//! most optional fields default so that varying response formats parse.

use serde::{Deserialize, Serialize};

/// Response wrapper for name search.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Search hits for the current query
    pub results: Vec<RecipeSummary>,
    /// Total matches upstream, across all pages
    #[serde(rename = "totalResults", default)]
    pub total_results: Option<i64>,
}

/// A recipe search hit. Also the persisted favorite-entry shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    /// Unique recipe identifier
    pub id: i64,
    /// Recipe title
    pub title: String,
    /// Image URL, absent for some recipes
    #[serde(default)]
    pub image: Option<String>,
}

/// A complete recipe as returned by the `information` operation.
///
/// Fetched on demand for the detail view and for saving a favorite; never
/// persisted beyond the extracted [`RecipeSummary`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeDetail {
    /// Unique recipe identifier
    pub id: i64,
    /// Recipe title
    pub title: String,
    /// Image URL, absent for some recipes
    #[serde(default)]
    pub image: Option<String>,
    /// Ordered ingredient list with amounts and units
    #[serde(rename = "extendedIngredients", default)]
    pub extended_ingredients: Vec<DetailIngredient>,
    /// Preparation instructions, possibly containing HTML markup
    #[serde(default)]
    pub instructions: Option<String>,
    /// Total preparation time in minutes
    #[serde(rename = "readyInMinutes", default)]
    pub ready_in_minutes: Option<i64>,
    /// Number of servings this recipe produces
    #[serde(default)]
    pub servings: Option<i64>,
}

impl RecipeDetail {
    /// The summary persisted when this recipe is saved as a favorite.
    pub fn summary(&self) -> RecipeSummary {
        RecipeSummary {
            id: self.id,
            title: self.title.clone(),
            image: self.image.clone(),
        }
    }
}

/// One entry of a recipe's ingredient list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailIngredient {
    /// Ingredient name
    pub name: String,
    /// Quantity in `unit`
    #[serde(default)]
    pub amount: f64,
    /// Measurement unit, empty for unitless amounts
    #[serde(default)]
    pub unit: String,
}
