//! # Recipe HTTP Client
//!
//! Typed client for the proxy's `/api/search` surface. All three logical
//! operations go through the proxy, which holds the Spoonacular API key;
//! the client itself never sees a credential.
//!
//! ## Modules
//!
//! - [`client`] - HTTP client implementation with the three operations
//! - [`types`] - Type definitions for the Spoonacular wire format
//!
//! ## Quick Start
//!
//! ```no_run
//! use forky::client::RecipeApi;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let api = RecipeApi::new("http://localhost:3000".to_string());
//!
//! // Search for recipes by name
//! let response = api.search_by_name("pasta").await?;
//! println!("Found {} recipes", response.results.len());
//!
//! // Fetch full details for the first hit
//! if let Some(hit) = response.results.first() {
//!     let detail = api.get_recipe(hit.id).await?;
//!     println!("{} serves {:?}", detail.title, detail.servings);
//! }
//! # Ok(())
//! # }
//! ```

#[allow(clippy::module_inception)]
pub mod client;
pub mod types;

pub use client::RecipeApi;
pub use types::*;
