//! View descriptors for search results and the recipe detail overlay.
//!
//! Rendering is declarative: these functions turn API responses into plain
//! data structures. Whatever presents them (terminal, web view) binds its
//! own events; nothing here touches an event loop.

use crate::client::types::{RecipeDetail, RecipeSummary};

/// Fallback image for result cards.
pub const CARD_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/200x200?text=No+Image";

/// Fallback image for the detail view.
pub const DETAIL_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/600x350?text=No+Image";

/// Shown when a recipe has no instructions at all.
pub const INSTRUCTIONS_FALLBACK: &str =
    "No detailed instructions available. Please check external sources or try a different recipe.";

/// One recipe card in a results grid. Selecting a card triggers a detail
/// fetch for `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCard {
    pub id: i64,
    pub title: String,
    pub image: String,
}

/// Content of the recipe detail overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub id: i64,
    pub title: String,
    pub image: String,
    pub ingredients: Vec<IngredientLine>,
    /// Plain text, HTML stripped.
    pub instructions: String,
    pub ready_in_minutes: Option<i64>,
    pub servings: Option<i64>,
    /// Drives the favorite-toggle control's label.
    pub is_favorite: bool,
}

/// One formatted line of the detail view's ingredient list.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientLine {
    pub name: String,
    /// Amount formatted to two decimal places.
    pub amount: String,
    pub unit: String,
}

/// Builds the card grid for a list of summaries, in the order given.
pub fn render_cards(recipes: &[RecipeSummary]) -> Vec<RecipeCard> {
    recipes
        .iter()
        .map(|recipe| RecipeCard {
            id: recipe.id,
            title: recipe.title.clone(),
            image: recipe
                .image
                .clone()
                .unwrap_or_else(|| CARD_PLACEHOLDER_IMAGE.to_string()),
        })
        .collect()
}

/// Builds the detail view for one recipe.
pub fn render_detail(recipe: &RecipeDetail, is_favorite: bool) -> DetailView {
    let ingredients = recipe
        .extended_ingredients
        .iter()
        .map(|ing| IngredientLine {
            name: ing.name.clone(),
            amount: format_amount(ing.amount),
            unit: ing.unit.clone(),
        })
        .collect();

    let instructions = match recipe.instructions.as_deref() {
        Some(raw) if !raw.trim().is_empty() => strip_html(raw),
        _ => INSTRUCTIONS_FALLBACK.to_string(),
    };

    DetailView {
        id: recipe.id,
        title: recipe.title.clone(),
        image: recipe
            .image
            .clone()
            .unwrap_or_else(|| DETAIL_PLACEHOLDER_IMAGE.to_string()),
        ingredients,
        instructions,
        ready_in_minutes: recipe.ready_in_minutes,
        servings: recipe.servings,
        is_favorite,
    }
}

/// Formats an ingredient amount to two decimals, rounding ties away from
/// zero (0.125 becomes "0.13", not the "0.12" that `{:.2}` alone gives).
fn format_amount(amount: f64) -> String {
    format!("{:.2}", (amount * 100.0).round() / 100.0)
}

/// Extracts the text content of an HTML fragment. No sanitization beyond
/// dropping the markup; fragments with no text at all come back verbatim.
pub fn strip_html(html: &str) -> String {
    let fragment = scraper::Html::parse_fragment(html);
    let text: String = fragment.root_element().text().collect();

    if text.trim().is_empty() {
        html.to_string()
    } else {
        text
    }
}
