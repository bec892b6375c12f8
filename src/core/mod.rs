pub mod game;
pub mod related_response;

pub use game::{Game, Requirements, SystemRequirements};
pub use related_response::{MatchReason, RelatedGame, RelatedResponse};
