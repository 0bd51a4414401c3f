// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Deal, RiskProfile, InvestorProfile, MatchDetails, MatchResult, ScoringWeights};
pub use requests::{MatchDealRequest, DealError};
pub use responses::{MatchDealResponse, HealthResponse, ErrorResponse};
