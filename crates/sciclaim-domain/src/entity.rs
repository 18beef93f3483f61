//! Entity categories attached to claim tokens

use std::collections::BTreeMap;
use std::fmt;

/// Mapping from entity category to the last token seen for it
///
/// Ordered so that printed and serialized output is stable.
pub type EntityMap = BTreeMap<EntityCategory, String>;

/// Coarse, shape-based entity category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityCategory {
    /// Digits followed by a percent sign, e.g. `40%`
    Percent,

    /// Two capitalized words separated by whitespace
    Org,
}

impl EntityCategory {
    /// Get the category label
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityCategory::Percent => "PERCENT",
            EntityCategory::Org => "ORG",
        }
    }

    /// Parse a category label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "PERCENT" => Some(EntityCategory::Percent),
            "ORG" => Some(EntityCategory::Org),
            _ => None,
        }
    }
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntityCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid entity category: {}", s))
    }
}
