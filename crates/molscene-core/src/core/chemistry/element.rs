use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Elements with dedicated styling or bonding rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    Hydrogen,
    Carbon,
    Nitrogen,
    Oxygen,
    Phosphorus,
}

impl Element {
    /// Recognizes a label by exact, case-sensitive comparison with the element symbol.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "H" => Some(Self::Hydrogen),
            "C" => Some(Self::Carbon),
            "N" => Some(Self::Nitrogen),
            "O" => Some(Self::Oxygen),
            "P" => Some(Self::Phosphorus),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Hydrogen => "H",
            Self::Carbon => "C",
            Self::Nitrogen => "N",
            Self::Oxygen => "O",
            Self::Phosphorus => "P",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unrecognized element symbol: '{0}'")]
pub struct ParseElementError(pub String);

impl FromStr for Element {
    type Err = ParseElementError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| ParseElementError(s.to_string()))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
