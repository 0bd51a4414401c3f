use crate::models::{Deal, MatchResult, ScoringWeights};
use crate::core::{
    criteria::{match_details, InvestorCriteria},
    scoring::calculate_match_score,
};

/// Result of matching one deal against the investor list
#[derive(Debug)]
pub struct MatchOutcome {
    /// Highest-scoring investors, at most `top_n`
    pub matches: Vec<MatchResult>,
    /// Investors scoring above the good-match threshold, over the whole list
    pub total_matches: usize,
    pub total_investors: usize,
}

/// Deal-to-investor matching orchestrator
///
/// # Pipeline Stages
/// 1. Score every investor (no pre-filtering)
/// 2. Count good matches over the full list
/// 3. Rank by score, keeping list order for ties
/// 4. Keep the top N
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    top_n: usize,
    good_match_threshold: u8,
}

impl Matcher {
    pub const DEFAULT_TOP_N: usize = 3;
    pub const DEFAULT_GOOD_MATCH_THRESHOLD: u8 = 50;

    pub fn new(weights: ScoringWeights, top_n: usize, good_match_threshold: u8) -> Self {
        Self {
            weights,
            top_n,
            good_match_threshold,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(
            ScoringWeights::default(),
            Self::DEFAULT_TOP_N,
            Self::DEFAULT_GOOD_MATCH_THRESHOLD,
        )
    }

    /// Score a single investor against a deal
    pub fn score(&self, deal: &Deal, investor: &InvestorCriteria) -> MatchResult {
        MatchResult {
            investor_id: investor.id().to_string(),
            investor_name: investor.name().to_string(),
            match_score: calculate_match_score(deal, investor, &self.weights),
            match_details: match_details(deal, investor),
        }
    }

    /// Score a deal against every investor and rank the results
    ///
    /// # Arguments
    /// * `deal` - A validated deal with a lowercase asset type
    /// * `investors` - The investor reference list, in registry order
    ///
    /// # Returns
    /// MatchOutcome with the top matches and the good-match count
    pub fn match_deal<'a, I>(&self, deal: &Deal, investors: I) -> MatchOutcome
    where
        I: IntoIterator<Item = &'a InvestorCriteria>,
    {
        let mut results: Vec<MatchResult> = investors
            .into_iter()
            .map(|investor| self.score(deal, investor))
            .collect();

        let total_investors = results.len();
        let total_matches = results
            .iter()
            .filter(|m| m.match_score > self.good_match_threshold)
            .count();

        // Stable sort keeps registry order among equal scores
        results.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        results.truncate(self.top_n);

        MatchOutcome {
            matches: results,
            total_matches,
            total_investors,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
