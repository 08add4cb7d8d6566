//! Dataset definitions.

use serde::{Deserialize, Serialize};

use crate::PokedexError;

/// A dataset the population pipeline can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    /// The Johto regional Pokédex roster.
    Pokemon,
    /// Every move introduced in generations one through four.
    Moves,
}

impl Dataset {
    /// Returns the dataset as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pokemon => "pokemon",
            Self::Moves => "moves",
        }
    }

    /// Returns the document store collection this dataset is written to.
    #[must_use]
    pub const fn collection(&self) -> &'static str {
        match self {
            Self::Pokemon => "heartgold-pokemon",
            Self::Moves => "heartgold-moves",
        }
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Dataset {
    type Err = PokedexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pokemon" => Ok(Self::Pokemon),
            "moves" => Ok(Self::Moves),
            _ => Err(PokedexError::UnknownDataset(s.to_string())),
        }
    }
}
