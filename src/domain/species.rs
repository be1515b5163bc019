//! Species presets.

use crate::error::{PlanError, PlanResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Starting attributes shared by every flower of a species
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesPreset {
    pub name: &'static str,
    pub color: &'static str,
    pub height: f64,
    pub health: f64,
}

/// The known flower species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Species {
    Orchid,
    Sunflower,
    Lily,
    Daffodil,
    Daisy,
}

impl Species {
    pub const ALL: [Species; 5] = [
        Self::Orchid,
        Self::Sunflower,
        Self::Lily,
        Self::Daffodil,
        Self::Daisy,
    ];

    /// Get the fixed starting attributes for this species
    pub fn preset(&self) -> SpeciesPreset {
        let (name, color, height, health) = match self {
            Self::Orchid => ("Orchid", "Purple", 12.0, 65.0),
            Self::Sunflower => ("Sunflower", "Yellow", 20.0, 75.0),
            Self::Lily => ("Lily", "White", 18.0, 70.0),
            Self::Daffodil => ("Daffodil", "Golden", 16.0, 68.0),
            Self::Daisy => ("Daisy", "White-Yellow", 14.0, 67.0),
        };

        SpeciesPreset {
            name,
            color,
            height,
            health,
        }
    }

    /// Lowercase identifier used in configuration
    pub fn id(&self) -> &'static str {
        match self {
            Self::Orchid => "orchid",
            Self::Sunflower => "sunflower",
            Self::Lily => "lily",
            Self::Daffodil => "daffodil",
            Self::Daisy => "daisy",
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Species {
    type Err = PlanError;

    fn from_str(s: &str) -> PlanResult<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|species| species.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PlanError::UnknownSpecies(wanted.to_string()))
    }
}

impl TryFrom<String> for Species {
    type Error = PlanError;

    fn try_from(value: String) -> PlanResult<Self> {
        value.parse()
    }
}

impl From<Species> for String {
    fn from(species: Species) -> Self {
        species.id().to_string()
    }
}
