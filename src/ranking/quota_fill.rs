use crate::core::{Game, MatchReason};
use crate::ranking::similarity::{GenreFrequency, ScoringFactors, SimilarityScorer};
use crate::ranking::{by_score_desc, candidates, RelatedPolicy, ScoredCandidate};

pub const DEFAULT_TOTAL: usize = 6;
pub const DEFAULT_DEVELOPER_CAP: usize = 3;

/// Developer-first quota fill for the inline "Related Games" panel.
///
/// Tier 1 takes games sharing a developer with the target in catalog order,
/// up to `developer_cap`. Tier 2 fills the remaining `total - tier1` slots
/// with genre matches ranked by genre-only score.
#[derive(Debug, Clone)]
pub struct QuotaFillPolicy {
    pub total: usize,
    pub developer_cap: usize,
}

impl QuotaFillPolicy {
    pub fn new(total: usize, developer_cap: usize) -> Self {
        Self {
            total,
            developer_cap: developer_cap.min(total),
        }
    }
}

impl Default for QuotaFillPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_TOTAL, DEFAULT_DEVELOPER_CAP)
    }
}

impl RelatedPolicy for QuotaFillPolicy {
    fn compose<'a>(
        &self,
        target: &Game,
        catalog: &'a [Game],
        frequency: &GenreFrequency,
    ) -> Vec<ScoredCandidate<'a>> {
        let scorer = SimilarityScorer::new(target, frequency, ScoringFactors::GENRE_ONLY);

        let mut related: Vec<ScoredCandidate<'a>> = candidates(target, catalog)
            .filter(|game| game.shares_developer(target))
            .take(self.developer_cap)
            .map(|game| {
                ScoredCandidate::new(game, scorer.score(game), MatchReason::SharedDeveloper)
            })
            .collect();

        let remaining = self.total.saturating_sub(related.len());
        if remaining == 0 {
            return related;
        }

        let mut by_genre: Vec<ScoredCandidate<'a>> = candidates(target, catalog)
            .filter(|game| !related.iter().any(|placed| std::ptr::eq(placed.game, *game)))
            .map(|game| ScoredCandidate::new(game, scorer.score(game), MatchReason::Similarity))
            .filter(|candidate| candidate.matching_genres > 0)
            .collect();

        by_genre.sort_by(by_score_desc);
        related.extend(by_genre.into_iter().take(remaining));

        related
    }

    fn name(&self) -> &str {
        "quota_fill"
    }
}
