use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationError};

/// Risk tolerance shared by deals and investors, ordered from safest to riskiest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskProfile {
    Low,
    Moderate,
    High,
}

impl RiskProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskProfile::Low => "low",
            RiskProfile::Moderate => "moderate",
            RiskProfile::High => "high",
        }
    }

    /// The next riskier profile, if any
    pub fn step_up(self) -> Option<RiskProfile> {
        match self {
            RiskProfile::Low => Some(RiskProfile::Moderate),
            RiskProfile::Moderate => Some(RiskProfile::High),
            RiskProfile::High => None,
        }
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(RiskProfile::Low),
            "moderate" => Ok(RiskProfile::Moderate),
            "high" => Ok(RiskProfile::High),
            other => Err(format!(
                "'{}' is not one of: low, moderate, high",
                other
            )),
        }
    }
}

/// A validated deal, ready for scoring
///
/// Built from a [`crate::models::MatchDealRequest`] at the request boundary;
/// `asset_type` is always lowercase here.
#[derive(Debug, Clone, PartialEq)]
pub struct Deal {
    pub asset_type: String,
    pub market: String,
    pub investment_amount: f64,
    pub expected_return: f64,
    pub risk_profile: RiskProfile,
}

/// Static investor acceptance criteria
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_investment_range", skip_on_field_errors = true))]
pub struct InvestorProfile {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(rename = "minimumInvestment")]
    #[validate(range(min = 0.0))]
    pub minimum_investment: f64,
    #[serde(rename = "maximumInvestment")]
    #[validate(range(min = 0.0))]
    pub maximum_investment: f64,
    #[serde(rename = "preferredAssetTypes", default)]
    pub preferred_asset_types: Vec<String>,
    #[serde(rename = "preferredMarkets", default)]
    pub preferred_markets: Vec<String>,
    #[serde(rename = "minimumReturnExpectation")]
    #[validate(range(min = 0.0))]
    pub minimum_return_expectation: f64,
    #[serde(rename = "riskProfile")]
    pub risk_profile: RiskProfile,
    #[serde(rename = "investmentHorizon", default)]
    pub investment_horizon: String,
}

fn validate_investment_range(profile: &InvestorProfile) -> Result<(), ValidationError> {
    if profile.minimum_investment > profile.maximum_investment {
        let mut err = ValidationError::new("investment_range");
        err.message = Some("minimumInvestment must not exceed maximumInvestment".into());
        return Err(err);
    }
    Ok(())
}

/// Per-criterion full-credit flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchDetails {
    #[serde(rename = "assetTypeMatch")]
    pub asset_type_match: bool,
    #[serde(rename = "marketMatch")]
    pub market_match: bool,
    #[serde(rename = "investmentSizeMatch")]
    pub investment_size_match: bool,
    #[serde(rename = "returnMatch")]
    pub return_match: bool,
    #[serde(rename = "riskProfileMatch")]
    pub risk_profile_match: bool,
}

/// Scored investor for a deal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "investorId")]
    pub investor_id: String,
    #[serde(rename = "investorName")]
    pub investor_name: String,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "matchDetails")]
    pub match_details: MatchDetails,
}

/// Maximum points per criterion; the five weights add up to 100
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub asset_type: f64,
    pub market: f64,
    pub investment_size: f64,
    pub expected_return: f64,
    pub risk_profile: f64,
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.asset_type
            + self.market
            + self.investment_size
            + self.expected_return
            + self.risk_profile
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            asset_type: 30.0,
            market: 25.0,
            investment_size: 20.0,
            expected_return: 15.0,
            risk_profile: 10.0,
        }
    }
}
