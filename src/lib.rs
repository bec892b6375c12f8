//! # Related Games Engine
//!
//! Similarity scoring for a static game catalog:
//! - Genre-rarity weighted similarity with exact-set and multi-genre bonuses
//! - Developer-first "quota fill" policy for the inline related panel
//! - Top-N ranked policy for the full "more like this" listing
//! - Developer, genre and platform listings with pagination
//! - Multiple interfaces: Rust library, Python bindings, HTTP API, CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use related_games_engine::{Catalog, RelatedGamesEngine};
//!
//! fn main() -> anyhow::Result<()> {
//!     let catalog = Catalog::from_json(&std::fs::read_to_string("catalog.json")?)?;
//!     let engine = RelatedGamesEngine::new(catalog);
//!
//!     let related = engine.related("elden-ring")?;
//!     for entry in &related.games {
//!         println!("{} - {}", entry.game.title, entry.score);
//!     }
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod catalog;
pub mod ranking;
pub mod engine;
pub mod error;

// Re-export primary types
pub use core::{Game, MatchReason, RelatedGame, RelatedResponse};
pub use catalog::{Catalog, CatalogSource, JsonFileSource, StaticSource};
pub use engine::{EngineOptions, RelatedGamesEngine};
pub use error::{CatalogError, Result};
pub use ranking::{QuotaFillPolicy, RelatedPolicy, ScoringFactors, TopRankedPolicy};

// Python bindings
#[cfg(feature = "python")]
pub mod python;

#[cfg(feature = "python")]
pub use python::*;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
