//! Bottle sizes.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a size string is not one we sell.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown bottle size: {0}")]
pub struct SizeError(pub String);

/// Bottle size a fragrance is sold in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Size {
    #[serde(rename = "30ml")]
    Ml30,
    #[default]
    #[serde(rename = "50ml")]
    Ml50,
    #[serde(rename = "100ml")]
    Ml100,
}

impl Size {
    /// All sizes, smallest first.
    pub const ALL: [Self; 3] = [Self::Ml30, Self::Ml50, Self::Ml100];

    /// Label used in forms and on the cart line (`"50ml"`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ml30 => "30ml",
            Self::Ml50 => "50ml",
            Self::Ml100 => "100ml",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Size {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "30ml" => Ok(Self::Ml30),
            "50ml" => Ok(Self::Ml50),
            "100ml" => Ok(Self::Ml100),
            other => Err(SizeError(other.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_50ml() {
        assert_eq!(Size::default(), Size::Ml50);
    }

    #[test]
    fn test_parse() {
        assert_eq!("30ml".parse::<Size>().unwrap(), Size::Ml30);
        assert_eq!(" 100ML ".parse::<Size>().unwrap(), Size::Ml100);
        assert!("75ml".parse::<Size>().is_err());
    }

    #[test]
    fn test_serde_uses_labels() {
        assert_eq!(serde_json::to_string(&Size::Ml50).unwrap(), "\"50ml\"");
        let parsed: Size = serde_json::from_str("\"100ml\"").unwrap();
        assert_eq!(parsed, Size::Ml100);
    }
}
