// Service exports
pub mod investors;

pub use investors::{InvestorRegistry, RegistryError};
