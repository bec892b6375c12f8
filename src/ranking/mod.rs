pub mod quota_fill;
pub mod similarity;
pub mod title;
pub mod top_ranked;

use std::cmp::Ordering;

use crate::core::{Game, MatchReason, RelatedGame};

pub use quota_fill::QuotaFillPolicy;
pub use similarity::{GenreFrequency, ScoringFactors, SimilarityScore, SimilarityScorer};
pub use title::{TitleMatch, TitleSearch};
pub use top_ranked::TopRankedPolicy;

/// Trait for related-games composition policies
pub trait RelatedPolicy: Send + Sync {
    /// Compose the related list for `target` out of `catalog`, best first.
    ///
    /// The target itself never appears in the output.
    fn compose<'a>(
        &self,
        target: &Game,
        catalog: &'a [Game],
        frequency: &GenreFrequency,
    ) -> Vec<ScoredCandidate<'a>>;

    /// Get policy name for logging
    fn name(&self) -> &str;
}

/// Candidate with similarity score
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    pub game: &'a Game,
    pub score: u32,
    pub matching_genres: usize,
    pub reason: MatchReason,
}

impl<'a> ScoredCandidate<'a> {
    pub fn new(game: &'a Game, score: SimilarityScore, reason: MatchReason) -> Self {
        Self {
            game,
            score: score.score,
            matching_genres: score.matching_genres,
            reason,
        }
    }

    pub fn to_related(&self) -> RelatedGame {
        RelatedGame {
            game: self.game.clone(),
            score: self.score,
            matching_genres: self.matching_genres,
            reason: self.reason,
        }
    }
}

/// Score descending, then matching genre count descending
pub(crate) fn by_score_desc(a: &ScoredCandidate<'_>, b: &ScoredCandidate<'_>) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| b.matching_genres.cmp(&a.matching_genres))
}

/// Every catalog game except the target
pub(crate) fn candidates<'a, 't>(
    target: &'t Game,
    catalog: &'a [Game],
) -> impl Iterator<Item = &'a Game> + 't
where
    'a: 't,
{
    catalog
        .iter()
        .filter(move |game| game.id != target.id && !std::ptr::eq(*game, target))
}
