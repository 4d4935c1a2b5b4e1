//! Target accent value object

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::domain::error::InvalidAccentError;

/// Target accent profile for a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Accent {
    #[default]
    British,
    American,
}

impl Accent {
    /// Language code sent to the endpoint
    pub const fn code(&self) -> &'static str {
        match self {
            Self::British => "en-br",
            Self::American => "en-us",
        }
    }

    /// Name shown to the user
    pub const fn label(&self) -> &'static str {
        match self {
            Self::British => "British",
            Self::American => "American",
        }
    }

    /// Identifier used on the command line and in the config file
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::British => "british",
            Self::American => "american",
        }
    }
}

impl FromStr for Accent {
    type Err = InvalidAccentError;

    /// Accepts either the name (`british`) or the code (`en-br`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "british" | "en-br" => Ok(Self::British),
            "american" | "en-us" => Ok(Self::American),
            _ => Err(InvalidAccentError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Accent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}
