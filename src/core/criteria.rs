use std::collections::HashSet;
use crate::models::{Deal, InvestorProfile, MatchDetails, RiskProfile};

/// How well a deal satisfies one criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    Full,
    Partial,
    Miss,
}

impl Fit {
    /// Points earned against a criterion worth `weight`; partial fit is half credit
    #[inline]
    pub fn credit(self, weight: f64) -> f64 {
        match self {
            Fit::Full => weight,
            Fit::Partial => weight * 0.5,
            Fit::Miss => 0.0,
        }
    }

    #[inline]
    pub fn is_full(self) -> bool {
        self == Fit::Full
    }
}

/// Investor profile with its preference lists indexed for lookup
///
/// Asset types and markets are lowercased into sets once, at load time,
/// so membership is case-insensitive and independent of list order.
#[derive(Debug, Clone)]
pub struct InvestorCriteria {
    pub profile: InvestorProfile,
    asset_types: HashSet<String>,
    markets: HashSet<String>,
}

impl InvestorCriteria {
    pub fn new(profile: InvestorProfile) -> Self {
        let asset_types = normalized_set(&profile.preferred_asset_types);
        let markets = normalized_set(&profile.preferred_markets);
        Self {
            profile,
            asset_types,
            markets,
        }
    }

    pub fn id(&self) -> &str {
        &self.profile.id
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    #[inline]
    pub fn accepts_asset_type(&self, asset_type: &str) -> bool {
        self.asset_types.contains(&asset_type.trim().to_lowercase())
    }

    #[inline]
    pub fn accepts_market(&self, market: &str) -> bool {
        self.markets.contains(&market.trim().to_lowercase())
    }
}

impl From<InvestorProfile> for InvestorCriteria {
    fn from(profile: InvestorProfile) -> Self {
        Self::new(profile)
    }
}

fn normalized_set(values: &[String]) -> HashSet<String> {
    values.iter().map(|v| v.trim().to_lowercase()).collect()
}

/// Asset type fit: binary
#[inline]
pub fn asset_type_fit(deal: &Deal, investor: &InvestorCriteria) -> Fit {
    if investor.accepts_asset_type(&deal.asset_type) {
        Fit::Full
    } else {
        Fit::Miss
    }
}

/// Market fit: binary
#[inline]
pub fn market_fit(deal: &Deal, investor: &InvestorCriteria) -> Fit {
    if investor.accepts_market(&deal.market) {
        Fit::Full
    } else {
        Fit::Miss
    }
}

/// Investment size fit
///
/// Full inside `[min, max]`, none below `0.8 * min` or above `1.2 * max`,
/// partial in the bands between.
#[inline]
pub fn investment_size_fit(amount: f64, minimum: f64, maximum: f64) -> Fit {
    if amount >= minimum && amount <= maximum {
        Fit::Full
    } else if amount < minimum * 0.8 || amount > maximum * 1.2 {
        Fit::Miss
    } else {
        Fit::Partial
    }
}

/// Return fit: partial down to 80% of the investor's minimum
#[inline]
pub fn return_fit(expected_return: f64, minimum_return: f64) -> Fit {
    if expected_return >= minimum_return {
        Fit::Full
    } else if expected_return >= minimum_return * 0.8 {
        Fit::Partial
    } else {
        Fit::Miss
    }
}

/// Risk fit: partial when the deal is exactly one step riskier than the investor
#[inline]
pub fn risk_fit(deal_risk: RiskProfile, investor_risk: RiskProfile) -> Fit {
    if deal_risk == investor_risk {
        Fit::Full
    } else if investor_risk.step_up() == Some(deal_risk) {
        Fit::Partial
    } else {
        Fit::Miss
    }
}

/// Full-credit flags for each criterion
pub fn match_details(deal: &Deal, investor: &InvestorCriteria) -> MatchDetails {
    let profile = &investor.profile;
    MatchDetails {
        asset_type_match: asset_type_fit(deal, investor).is_full(),
        market_match: market_fit(deal, investor).is_full(),
        investment_size_match: investment_size_fit(
            deal.investment_amount,
            profile.minimum_investment,
            profile.maximum_investment,
        )
        .is_full(),
        return_match: return_fit(deal.expected_return, profile.minimum_return_expectation)
            .is_full(),
        risk_profile_match: risk_fit(deal.risk_profile, profile.risk_profile).is_full(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_investment_size_bands() {
        // 2M-50M range: partial bands are [1.6M, 2M) and (50M, 60M]
        assert_eq!(investment_size_fit(4_000_000.0, 2_000_000.0, 50_000_000.0), Fit::Full);
        assert_eq!(investment_size_fit(2_000_000.0, 2_000_000.0, 50_000_000.0), Fit::Full);
        assert_eq!(investment_size_fit(1_800_000.0, 2_000_000.0, 50_000_000.0), Fit::Partial);
        assert_eq!(investment_size_fit(1_600_000.0, 2_000_000.0, 50_000_000.0), Fit::Partial);
        assert_eq!(investment_size_fit(1_500_000.0, 2_000_000.0, 50_000_000.0), Fit::Miss);
        assert_eq!(investment_size_fit(55_000_000.0, 2_000_000.0, 50_000_000.0), Fit::Partial);
        assert_eq!(investment_size_fit(60_000_000.0, 2_000_000.0, 50_000_000.0), Fit::Partial);
        assert_eq!(investment_size_fit(61_000_000.0, 2_000_000.0, 50_000_000.0), Fit::Miss);
    }

    #[test]
    fn test_return_bands() {
        assert_eq!(return_fit(9.0, 8.0), Fit::Full);
        assert_eq!(return_fit(8.0, 8.0), Fit::Full);
        assert_eq!(return_fit(9.0, 10.0), Fit::Partial);
        assert_eq!(return_fit(8.0, 10.0), Fit::Partial);
        assert_eq!(return_fit(7.9, 10.0), Fit::Miss);
    }

    #[test]
    fn test_risk_steps() {
        use RiskProfile::*;
        assert_eq!(risk_fit(Moderate, Moderate), Fit::Full);
        assert_eq!(risk_fit(Moderate, Low), Fit::Partial);
        assert_eq!(risk_fit(High, Moderate), Fit::Partial);
        assert_eq!(risk_fit(High, Low), Fit::Miss);
        assert_eq!(risk_fit(Low, Moderate), Fit::Miss);
        assert_eq!(risk_fit(Moderate, High), Fit::Miss);
    }

    #[test]
    fn test_fit_credit() {
        assert_eq!(Fit::Full.credit(15.0), 15.0);
        assert_eq!(Fit::Partial.credit(15.0), 7.5);
        assert_eq!(Fit::Miss.credit(15.0), 0.0);
    }

    #[test]
    fn test_preferences_case_insensitive() {
        let criteria = InvestorCriteria::new(InvestorProfile {
            id: "inv".to_string(),
            name: "Investor".to_string(),
            minimum_investment: 0.0,
            maximum_investment: 1.0,
            preferred_asset_types: vec!["Multifamily".to_string()],
            preferred_markets: vec!["Chicago".to_string()],
            minimum_return_expectation: 0.0,
            risk_profile: RiskProfile::Low,
            investment_horizon: String::new(),
        });

        assert!(criteria.accepts_asset_type("multifamily"));
        assert!(criteria.accepts_market("CHICAGO"));
        assert!(!criteria.accepts_market("Boston"));
    }
}
