use crate::core::InvestorCriteria;
use crate::models::InvestorProfile;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use validator::Validate;

/// Investor list shipped with the service
const BUILTIN_INVESTORS: &str = include_str!("../../config/investors.toml");

/// Errors that can occur while loading the investor reference list
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Failed to read investor file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse investor file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid investor profile '{id}': {source}")]
    InvalidProfile {
        id: String,
        #[source]
        source: validator::ValidationErrors,
    },

    #[error("Duplicate investor id: {0}")]
    DuplicateId(String),

    #[error("Investor list is empty")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct InvestorFile {
    #[serde(default)]
    investors: Vec<InvestorProfile>,
}

/// Read-only investor reference list
///
/// Loaded once at startup and shared by every worker. Iteration follows the
/// order of the source file, which is also the tiebreak order for ranking.
#[derive(Debug, Clone)]
pub struct InvestorRegistry {
    investors: Vec<InvestorCriteria>,
    index: HashMap<String, usize>,
}

impl InvestorRegistry {
    /// Build a registry from already-parsed profiles
    pub fn from_profiles(profiles: Vec<InvestorProfile>) -> Result<Self, RegistryError> {
        if profiles.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut investors = Vec::with_capacity(profiles.len());
        let mut index = HashMap::with_capacity(profiles.len());

        for profile in profiles {
            profile.validate().map_err(|source| RegistryError::InvalidProfile {
                id: profile.id.clone(),
                source,
            })?;

            if index.insert(profile.id.clone(), investors.len()).is_some() {
                return Err(RegistryError::DuplicateId(profile.id));
            }
            investors.push(InvestorCriteria::new(profile));
        }

        Ok(Self { investors, index })
    }

    /// Parse a TOML document with an `[[investors]]` array
    pub fn from_toml_str(contents: &str) -> Result<Self, RegistryError> {
        let file: InvestorFile = toml::from_str(contents)?;
        Self::from_profiles(file.investors)
    }

    /// Load the investor list from a TOML file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, RegistryError> {
        let contents = tokio::fs::read_to_string(path.as_ref()).await?;
        let registry = Self::from_toml_str(&contents)?;
        tracing::debug!(
            "Loaded {} investors from {}",
            registry.len(),
            path.as_ref().display()
        );
        Ok(registry)
    }

    /// The investor list compiled into the binary
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::from_toml_str(BUILTIN_INVESTORS)
    }

    pub fn get(&self, id: &str) -> Option<&InvestorCriteria> {
        self.index.get(id).map(|&i| &self.investors[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InvestorCriteria> {
        self.investors.iter()
    }

    pub fn len(&self) -> usize {
        self.investors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.investors.is_empty()
    }
}

impl<'a> IntoIterator for &'a InvestorRegistry {
    type Item = &'a InvestorCriteria;
    type IntoIter = std::slice::Iter<'a, InvestorCriteria>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
