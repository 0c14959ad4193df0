//! # Forky
//!
//! Recipe discovery built on the Spoonacular API. The crate has two sides:
//!
//! ## Proxy Module
//!
//! The [`proxy`] module exposes `GET /api/search`, a stateless endpoint that
//! maps a logical operation name to one of three Spoonacular URL templates,
//! injects the server-held API key, and relays the upstream JSON body. The
//! key never reaches the client.
//!
//! ## Client Modules
//!
//! The [`client`] module is a typed HTTP client for the proxy surface
//! (name search, ingredient search, recipe detail). The [`session`] module
//! drives those operations against an explicit UI state object, [`render`]
//! turns responses into view descriptors, and [`favorites`] persists a
//! saved-recipes list through an injected storage backend.
//!
//! ## Quick Start
//!
//! ```no_run
//! use forky::{RecipeApi, Session};
//! use forky::favorites::FileStorage;
//!
//! # async fn example() {
//! let api = RecipeApi::new("http://localhost:3000".to_string());
//! let mut session = Session::new(FileStorage::new("forky.json"));
//!
//! session.search_by_name(&api, "pasta").await;
//! for card in &session.cards {
//!     println!("{} (#{})", card.title, card.id);
//! }
//! # }
//! ```

pub mod client;
pub mod favorites;
pub mod proxy;
pub mod render;
pub mod session;

pub use client::RecipeApi;
pub use favorites::Favorites;
pub use proxy::ProxyConfig;
pub use session::Session;
