// Integration tests for Capmatch

use capmatch::core::Matcher;
use capmatch::models::{MatchDealRequest, RiskProfile};
use capmatch::services::InvestorRegistry;
use serde_json::json;

const FIVE_INVESTORS: &str = r#"
[[investors]]
id = "office-fund"
name = "Office Fund"
minimumInvestment = 10000000
maximumInvestment = 100000000
preferredAssetTypes = ["office"]
preferredMarkets = ["Boston"]
minimumReturnExpectation = 12
riskProfile = "low"

[[investors]]
id = "chicago-resi"
name = "Chicago Residential"
minimumInvestment = 1000000
maximumInvestment = 10000000
preferredAssetTypes = ["multifamily"]
preferredMarkets = ["Chicago"]
minimumReturnExpectation = 8
riskProfile = "moderate"

[[investors]]
id = "sunbelt"
name = "Sunbelt Partners"
minimumInvestment = 5000000
maximumInvestment = 50000000
preferredAssetTypes = ["industrial"]
preferredMarkets = ["Phoenix"]
minimumReturnExpectation = 7
riskProfile = "high"

[[investors]]
id = "midwest-value"
name = "Midwest Value"
minimumInvestment = 2000000
maximumInvestment = 20000000
preferredAssetTypes = ["multifamily", "retail"]
preferredMarkets = ["Detroit", "Chicago"]
minimumReturnExpectation = 10
riskProfile = "low"

[[investors]]
id = "hotel-opp"
name = "Hotel Opportunity"
minimumInvestment = 20000000
maximumInvestment = 80000000
preferredAssetTypes = ["hospitality"]
preferredMarkets = ["Miami"]
minimumReturnExpectation = 15
riskProfile = "high"
"#;

fn request(value: serde_json::Value) -> MatchDealRequest {
    serde_json::from_value(value).unwrap()
}

fn chicago_deal() -> MatchDealRequest {
    request(json!({
        "assetType": "MULTIFAMILY",
        "market": "Chicago",
        "investmentAmount": 4000000,
        "expectedReturn": 9,
        "riskProfile": "moderate"
    }))
}

#[test]
fn test_integration_end_to_end_matching() {
    let registry = InvestorRegistry::from_toml_str(FIVE_INVESTORS).unwrap();
    let matcher = Matcher::with_default_weights();

    let deal = chicago_deal().to_deal().unwrap();
    assert_eq!(deal.asset_type, "multifamily");
    assert_eq!(deal.risk_profile, RiskProfile::Moderate);

    let outcome = matcher.match_deal(&deal, &registry);

    // chicago-resi: 30 + 25 + 20 + 15 + 10 = 100
    // midwest-value: 30 + 25 + 20 + 7.5 + 5 = 87.5 -> 88
    // everything else stays at or below 50
    assert_eq!(outcome.total_investors, 5);
    assert_eq!(outcome.total_matches, 2);
    assert_eq!(outcome.matches.len(), 3);
    assert_eq!(outcome.matches[0].investor_id, "chicago-resi");
    assert_eq!(outcome.matches[0].match_score, 100);
    assert_eq!(outcome.matches[1].investor_id, "midwest-value");
    assert_eq!(outcome.matches[1].match_score, 88);

    for i in 1..outcome.matches.len() {
        assert!(
            outcome.matches[i - 1].match_score >= outcome.matches[i].match_score,
            "Matches not sorted by score"
        );
    }
}

#[test]
fn test_builtin_registry_example_scores() {
    let registry = InvestorRegistry::builtin().unwrap();
    let matcher = Matcher::with_default_weights();
    let deal = chicago_deal().to_deal().unwrap();

    let greystar = matcher.score(&deal, registry.get("greystar").unwrap());
    assert_eq!(greystar.match_score, 95);
    assert_eq!(greystar.investor_name, "Greystar Real Estate Partners");

    let brookfield = matcher.score(&deal, registry.get("brookfield").unwrap());
    assert_eq!(brookfield.match_score, 12);
}

#[test]
fn test_total_matches_exceeds_returned_matches() {
    let registry = InvestorRegistry::builtin().unwrap();
    let matcher = Matcher::with_default_weights();
    let deal = chicago_deal().to_deal().unwrap();

    let outcome = matcher.match_deal(&deal, &registry);

    // greystar, blackstone, starwood and bridge all clear 50 for this deal
    assert_eq!(outcome.matches.len(), 3);
    assert!(outcome.total_matches > outcome.matches.len());
}

#[test]
fn test_every_investor_is_scored() {
    let registry = InvestorRegistry::from_toml_str(FIVE_INVESTORS).unwrap();
    let matcher = Matcher::new(Default::default(), 10, 50);
    let deal = chicago_deal().to_deal().unwrap();

    let outcome = matcher.match_deal(&deal, &registry);

    assert_eq!(outcome.matches.len(), registry.len());
    for m in &outcome.matches {
        assert!(m.match_score <= 100);
    }
}

#[test]
fn test_missing_market_reported() {
    let req = request(json!({
        "assetType": "multifamily",
        "investmentAmount": 4000000,
        "expectedReturn": 9,
        "riskProfile": "moderate"
    }));

    let err = req.to_deal().unwrap_err();
    assert_eq!(err.field(), "market");
    assert_eq!(err.to_string(), "Missing required field: market");
}
