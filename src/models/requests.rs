use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use thiserror::Error;
use crate::models::domain::{Deal, RiskProfile};

/// Errors raised while turning a raw deal payload into a [`Deal`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DealError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value for {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl DealError {
    /// Name of the offending field, as it appears on the wire
    pub fn field(&self) -> &'static str {
        match self {
            DealError::MissingField(field) => field,
            DealError::InvalidField { field, .. } => field,
        }
    }
}

/// Deal payload as submitted by clients
///
/// All scored fields are optional so that a missing one can be reported by
/// name. Numbers stay as JSON numbers so the echo keeps their written form.
/// Anything else in the payload lands in `extra` and is echoed back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchDealRequest {
    #[serde(rename = "assetType", default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
    #[serde(rename = "investmentAmount", default, skip_serializing_if = "Option::is_none")]
    pub investment_amount: Option<Number>,
    #[serde(rename = "expectedReturn", default, skip_serializing_if = "Option::is_none")]
    pub expected_return: Option<Number>,
    #[serde(rename = "riskProfile", default, skip_serializing_if = "Option::is_none")]
    pub risk_profile: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MatchDealRequest {
    /// Validate the payload and build a scorable [`Deal`]
    ///
    /// Required fields are checked in order (assetType, market,
    /// investmentAmount, expectedReturn, riskProfile) and the first missing
    /// one is reported. Blank strings count as missing.
    pub fn to_deal(&self) -> Result<Deal, DealError> {
        let asset_type = required_str(&self.asset_type, "assetType")?;
        let market = required_str(&self.market, "market")?;
        let investment_amount = required_number(&self.investment_amount, "investmentAmount")?;
        let expected_return = required_number(&self.expected_return, "expectedReturn")?;
        let risk_profile = required_str(&self.risk_profile, "riskProfile")?;

        if !investment_amount.is_finite() || investment_amount <= 0.0 {
            return Err(DealError::InvalidField {
                field: "investmentAmount",
                reason: "must be a positive number".to_string(),
            });
        }
        if !expected_return.is_finite() {
            return Err(DealError::InvalidField {
                field: "expectedReturn",
                reason: "must be a finite number".to_string(),
            });
        }
        let risk_profile = risk_profile
            .parse::<RiskProfile>()
            .map_err(|reason| DealError::InvalidField {
                field: "riskProfile",
                reason,
            })?;

        Ok(Deal {
            asset_type: asset_type.to_lowercase(),
            market: market.to_string(),
            investment_amount,
            expected_return,
            risk_profile,
        })
    }

    /// Copy of the payload carrying the asset type that was scored
    pub fn normalized(&self, deal: &Deal) -> Self {
        Self {
            asset_type: Some(deal.asset_type.clone()),
            ..self.clone()
        }
    }
}

fn required_number(value: &Option<Number>, field: &'static str) -> Result<f64, DealError> {
    let number = value.as_ref().ok_or(DealError::MissingField(field))?;
    number.as_f64().ok_or_else(|| DealError::InvalidField {
        field,
        reason: format!("{} is not representable as a number", number),
    })
}

fn required_str<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, DealError> {
    match value.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(DealError::MissingField(field)),
    }
}
