//! Care actions and their effect table.

use super::Flower;
use crate::error::{PlanError, PlanResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::OnceLock;

/// Health gained per hour of sunlight
pub const SUNLIGHT_HEALTH_PER_HOUR: f64 = 1.5;

/// A single care step in a flower's plan.
///
/// Written and read in the textual notation `watering`, `sunlight(4)`, ...
/// which is also how actions appear in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CareAction {
    Watering,
    Fertilizing,
    Pruning,
    /// Sun exposure; no bound is placed on `hours`, negative values included.
    Sunlight { hours: i32 },
    Repotting,
    Aromatizing,
    Misting,
}

/// The change one action makes to a flower
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CareEffect {
    /// Added to height (cm)
    pub height: f64,
    /// Added to health before clamping
    pub health: f64,
    /// Prepended to the color, followed by a space
    pub color_prefix: Option<&'static str>,
}

impl CareAction {
    /// Get the effect row for this action
    pub fn effect(&self) -> CareEffect {
        let (height, health, color_prefix) = match *self {
            Self::Watering => (2.0, 10.0, None),
            Self::Fertilizing => (5.0, 5.0, None),
            Self::Pruning => (0.0, 8.0, Some("Brighter")),
            Self::Sunlight { hours } => (0.0, f64::from(hours) * SUNLIGHT_HEALTH_PER_HOUR, None),
            Self::Repotting => (1.0, 12.0, Some("Refreshed")),
            Self::Aromatizing => (0.0, 7.0, Some("Aromatic")),
            Self::Misting => (0.5, 6.0, None),
        };

        CareEffect {
            height,
            health,
            color_prefix,
        }
    }

    /// Apply this action to a flower in place
    pub fn apply_to(&self, flower: &mut Flower) {
        let effect = self.effect();

        flower.set_health(flower.health() + effect.health);
        if effect.height != 0.0 {
            flower.set_height(flower.height() + effect.height);
        }
        if let Some(prefix) = effect.color_prefix {
            let color = format!("{} {}", prefix, flower.color());
            flower.set_color(color);
        }

        tracing::debug!(
            flower = flower.name(),
            action = %self,
            height = flower.height(),
            health = flower.health(),
            "applied care action"
        );
    }

    /// Notation keyword, without arguments
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Watering => "watering",
            Self::Fertilizing => "fertilizing",
            Self::Pruning => "pruning",
            Self::Sunlight { .. } => "sunlight",
            Self::Repotting => "repotting",
            Self::Aromatizing => "aromatizing",
            Self::Misting => "misting",
        }
    }
}

impl std::fmt::Display for CareAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sunlight { hours } => write!(f, "sunlight({})", hours),
            other => write!(f, "{}", other.keyword()),
        }
    }
}

fn notation_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^([a-z]+)\s*(?:\(\s*([^)]*?)\s*\))?$").unwrap())
}

impl FromStr for CareAction {
    type Err = PlanError;

    fn from_str(s: &str) -> PlanResult<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        let caps = notation_pattern()
            .captures(&normalized)
            .ok_or_else(|| PlanError::UnknownAction(normalized.clone()))?;

        let keyword = &caps[1];
        let argument = caps.get(2).map(|m| m.as_str());

        let simple = match keyword {
            "watering" => Self::Watering,
            "fertilizing" => Self::Fertilizing,
            "pruning" => Self::Pruning,
            "repotting" => Self::Repotting,
            "aromatizing" => Self::Aromatizing,
            "misting" => Self::Misting,
            "sunlight" => {
                let raw = argument.ok_or_else(|| PlanError::MissingHours(keyword.to_string()))?;
                let hours = raw
                    .parse::<i32>()
                    .map_err(|_| PlanError::InvalidHours(raw.to_string()))?;
                return Ok(Self::Sunlight { hours });
            }
            _ => return Err(PlanError::UnknownAction(keyword.to_string())),
        };

        match argument {
            Some(_) => Err(PlanError::UnexpectedArgument(keyword.to_string())),
            None => Ok(simple),
        }
    }
}

impl TryFrom<String> for CareAction {
    type Error = PlanError;

    fn try_from(value: String) -> PlanResult<Self> {
        value.parse()
    }
}

impl From<CareAction> for String {
    fn from(action: CareAction) -> Self {
        action.to_string()
    }
}
