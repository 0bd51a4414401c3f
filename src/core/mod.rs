// Core algorithm exports
pub mod criteria;
pub mod matcher;
pub mod scoring;

pub use criteria::{InvestorCriteria, Fit, match_details};
pub use matcher::{Matcher, MatchOutcome};
pub use scoring::calculate_match_score;
