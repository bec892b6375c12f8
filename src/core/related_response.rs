use serde::{Deserialize, Serialize};
use crate::core::Game;

/// Why a game made it into a related list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchReason {
    /// Shares at least one developer with the target (quota-fill priority tier)
    SharedDeveloper,
    /// Placed by similarity score
    Similarity,
}

/// A related game with the score that placed it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedGame {
    pub game: Game,

    /// Similarity score under the policy's scoring factors
    pub score: u32,

    /// Number of distinct genres shared with the target
    pub matching_genres: usize,

    pub reason: MatchReason,
}

/// Related-games response with target and metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedResponse {
    /// The game the list was computed for
    pub target: Game,

    /// Related games, best first
    #[serde(default)]
    pub games: Vec<RelatedGame>,

    /// Policy used (quota_fill, top_ranked)
    pub policy: String,

    /// Composition latency in milliseconds
    pub latency_ms: f64,
}

impl RelatedResponse {
    pub fn new(target: Game, policy: impl Into<String>, latency_ms: f64) -> Self {
        Self {
            target,
            games: Vec::new(),
            policy: policy.into(),
            latency_ms,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Ids in result order
    pub fn ids(&self) -> Vec<&str> {
        self.games.iter().map(|r| r.game.id.as_str()).collect()
    }

    /// "Found N similar game(s)" line for listings
    pub fn summary(&self) -> String {
        let n = self.games.len();
        format!(
            "Found {} similar game{} for {}",
            n,
            if n == 1 { "" } else { "s" },
            self.target.title
        )
    }
}
