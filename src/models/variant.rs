use crate::PatternError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selector key for the Factory Method example.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub enum CarKind {
    #[serde(rename = "mastodon")]
    Mastodon,
    #[serde(rename = "rhino")]
    Rhino,
}

impl CarKind {
    pub const ALL: [CarKind; 2] = [CarKind::Mastodon, CarKind::Rhino];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mastodon => "mastodon",
            Self::Rhino => "rhino",
        }
    }
}

impl fmt::Display for CarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for CarKind {
    type Error = PatternError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "mastodon" => Ok(Self::Mastodon),
            "rhino" => Ok(Self::Rhino),
            _ => Err(PatternError::unknown("car kind", value)),
        }
    }
}

impl TryFrom<String> for CarKind {
    type Error = PatternError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl FromStr for CarKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

/// Selector key for the Abstract Factory example: the product family.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub enum BodyStyle {
    #[serde(rename = "sedan")]
    Sedan,
    #[serde(rename = "hatchback")]
    Hatchback,
}

impl BodyStyle {
    pub const ALL: [BodyStyle; 2] = [BodyStyle::Sedan, BodyStyle::Hatchback];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sedan => "sedan",
            Self::Hatchback => "hatchback",
        }
    }

    /// Tag that prefixes every GPS line printed by this family.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sedan => "[Sedan]",
            Self::Hatchback => "[Hatchback]",
        }
    }
}

impl fmt::Display for BodyStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for BodyStyle {
    type Error = PatternError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "sedan" | "saloon" => Ok(Self::Sedan),
            "hatchback" | "hatch" => Ok(Self::Hatchback),
            _ => Err(PatternError::unknown("body style", value)),
        }
    }
}

impl TryFrom<String> for BodyStyle {
    type Error = PatternError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl FromStr for BodyStyle {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

/// How a Factory Method demo step obtains its factory.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "String")]
pub enum FactoryVia {
    /// Constructs the concrete factory type at the call site.
    #[serde(rename = "direct")]
    Direct,
    /// Goes through the keyed selector.
    #[serde(rename = "selector")]
    #[default]
    Selector,
}

impl fmt::Display for FactoryVia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct => write!(f, "direct"),
            Self::Selector => write!(f, "selector"),
        }
    }
}

impl TryFrom<&str> for FactoryVia {
    type Error = PatternError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "direct" | "new" => Ok(Self::Direct),
            "selector" | "keyed" => Ok(Self::Selector),
            _ => Err(PatternError::unknown("factory source", value)),
        }
    }
}

impl TryFrom<String> for FactoryVia {
    type Error = PatternError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl FromStr for FactoryVia {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}
