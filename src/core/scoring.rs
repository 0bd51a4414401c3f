use crate::models::{Deal, ScoringWeights};
use crate::core::criteria::{
    asset_type_fit, investment_size_fit, market_fit, return_fit, risk_fit, InvestorCriteria,
};

/// Calculate a match score (0-100) for an investor against a deal
///
/// Scoring formula (default weights):
/// score = round(
///     asset_type      * 30 +     # binary
///     market          * 25 +     # binary
///     investment_size * 20 +     # half credit within 20% of the range
///     expected_return * 15 +     # half credit down to 80% of the minimum
///     risk_profile    * 10       # half credit one step riskier
/// )
///
/// Ties round to even, so a raw 12.5 scores 12.
pub fn calculate_match_score(
    deal: &Deal,
    investor: &InvestorCriteria,
    weights: &ScoringWeights,
) -> u8 {
    let profile = &investor.profile;

    let asset_type = asset_type_fit(deal, investor).credit(weights.asset_type);
    let market = market_fit(deal, investor).credit(weights.market);
    let investment_size = investment_size_fit(
        deal.investment_amount,
        profile.minimum_investment,
        profile.maximum_investment,
    )
    .credit(weights.investment_size);
    let expected_return = return_fit(deal.expected_return, profile.minimum_return_expectation)
        .credit(weights.expected_return);
    let risk = risk_fit(deal.risk_profile, profile.risk_profile).credit(weights.risk_profile);

    let total = asset_type + market + investment_size + expected_return + risk;

    total.round_ties_even().clamp(0.0, 100.0) as u8
}
