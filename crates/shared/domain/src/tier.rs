//! Deployment tier.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Deployment tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Development,
    Production,
}

impl Tier {
    /// Tier selected at build time by the `production` feature
    pub fn build_default() -> Self {
        if cfg!(feature = "production") {
            Tier::Production
        } else {
            Tier::Development
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Tier::Production)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Development => "development",
            Tier::Production => "production",
        }
    }
}

impl From<bool> for Tier {
    fn from(production: bool) -> Self {
        if production {
            Tier::Production
        } else {
            Tier::Development
        }
    }
}

impl FromStr for Tier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Tier::Development),
            "production" | "prod" => Ok(Tier::Production),
            _ => Err(DomainError::invalid_tier(s)),
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
