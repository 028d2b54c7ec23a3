//! Domain primitive types used across the deploykit workspace.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Deployment tier of an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Short-lived, branch-scoped deployments.
    Development,
    /// Pre-production deployments.
    Staging,
    /// Customer-facing deployments.
    Production,
}

impl Tier {
    /// All tiers in ascending order of durability.
    pub const ALL: [Self; 3] = [Self::Development, Self::Staging, Self::Production];

    /// Returns the canonical lowercase tier name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }

    /// Returns `true` for [`Tier::Production`].
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Returns `true` for [`Tier::Staging`].
    #[must_use]
    pub const fn is_staging(self) -> bool {
        matches!(self, Self::Staging)
    }

    /// Returns `true` for [`Tier::Development`].
    #[must_use]
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }

    /// Returns `true` for staging or production.
    #[must_use]
    pub const fn is_production_or_staging(self) -> bool {
        self.is_production() || self.is_staging()
    }

    /// Classifies the tier on the durable/disposable axis.
    #[must_use]
    pub const fn durability(self) -> Durability {
        if self.is_production_or_staging() {
            Durability::Durable
        } else {
            Durability::Disposable
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known tier name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTier(pub String);

impl fmt::Display for UnknownTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tier: {}", self.0)
    }
}

impl std::error::Error for UnknownTier {}

impl FromStr for Tier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| UnknownTier(s.to_string()))
    }
}

/// The single branching axis of every resolved profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Durability {
    /// Staging and production: retention, capacity, stability.
    Durable,
    /// Development: minimal, cheap, safe to tear down.
    Disposable,
}

impl Durability {
    /// Returns `true` for [`Durability::Durable`].
    #[must_use]
    pub const fn is_durable(self) -> bool {
        matches!(self, Self::Durable)
    }
}

impl fmt::Display for Durability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Durable => write!(f, "durable"),
            Self::Disposable => write!(f, "disposable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_tiers() {
        assert_eq!("development".parse::<Tier>(), Ok(Tier::Development));
        assert_eq!("staging".parse::<Tier>(), Ok(Tier::Staging));
        assert_eq!("production".parse::<Tier>(), Ok(Tier::Production));
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("Production".parse::<Tier>().is_err());
        assert!("prod".parse::<Tier>().is_err());
        assert!("".parse::<Tier>().is_err());
    }

    #[test]
    fn staging_and_production_are_durable() {
        assert_eq!(Tier::Production.durability(), Durability::Durable);
        assert_eq!(Tier::Staging.durability(), Durability::Durable);
        assert_eq!(Tier::Development.durability(), Durability::Disposable);
    }

    #[test]
    fn display_matches_canonical_name() {
        for tier in Tier::ALL {
            assert_eq!(tier.to_string(), tier.as_str());
        }
    }
}
