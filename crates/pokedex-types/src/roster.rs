//! Roster references.

use serde::{Deserialize, Serialize};

/// One entity to fetch during a population run.
///
/// Rosters only live for the duration of a single run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRef {
    /// Entity name as listed by the source.
    pub name: String,
    /// Source URL listed for the entity.
    pub url: String,
    /// Entry number in the regional Pokédex, when the roster is one.
    pub regional_id: Option<u32>,
}

impl RosterRef {
    /// Creates a reference without a regional entry number.
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            regional_id: None,
        }
    }

    /// Sets the regional entry number.
    #[must_use]
    pub const fn with_regional_id(mut self, regional_id: u32) -> Self {
        self.regional_id = Some(regional_id);
        self
    }
}

impl std::fmt::Display for RosterRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.regional_id {
            Some(id) => write!(f, "#{id:03} {}", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}
