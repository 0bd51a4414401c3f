//! Capmatch - deal-investor matching service for real-estate capital placement
//!
//! This library provides the match scoring used to pair a real-estate deal
//! with the investors whose stated criteria it best satisfies.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, MatchOutcome, InvestorCriteria, calculate_match_score};
pub use models::{Deal, RiskProfile, InvestorProfile, MatchResult, MatchDetails, ScoringWeights, MatchDealRequest, MatchDealResponse, DealError};
pub use services::{InvestorRegistry, RegistryError};
