//! Flower entity and its care plan.

use super::{CareAction, Species};
use serde::Serialize;

/// Lowest possible health
pub const MIN_HEALTH: f64 = 0.0;
/// Highest possible health
pub const MAX_HEALTH: f64 = 100.0;

/// A flower together with the ordered care plan it owns.
///
/// Health is kept in `[MIN_HEALTH, MAX_HEALTH]` on every write, construction
/// included. Height and color are unconstrained.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Flower {
    name: String,
    color: String,
    height: f64,
    health: f64,
    care_plan: Vec<CareAction>,
}

impl Flower {
    /// Create a flower with an empty care plan
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        height: f64,
        health: f64,
    ) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            height,
            health: clamp_health(health),
            care_plan: Vec::new(),
        }
    }

    /// Create a flower from one of the species presets
    pub fn from_species(species: Species) -> Self {
        let preset = species.preset();
        Self::new(preset.name, preset.color, preset.height, preset.health)
    }

    /// Attach a ready-made plan, appended after any existing actions
    pub fn with_care_plan(mut self, plan: impl IntoIterator<Item = CareAction>) -> Self {
        self.care_plan.extend(plan);
        self
    }

    /// Append an action to the plan
    pub fn add_care_action(&mut self, action: CareAction) {
        self.care_plan.push(action);
    }

    /// Apply every planned action in the order it was attached.
    ///
    /// Calling this again applies the whole plan again.
    pub fn care(&mut self) {
        let plan = std::mem::take(&mut self.care_plan);
        for action in &plan {
            action.apply_to(self);
        }
        self.care_plan = plan;

        tracing::info!(
            flower = %self.name,
            actions = self.care_plan.len(),
            "cared for flower"
        );
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Height in cm
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    /// Health in percent
    pub fn health(&self) -> f64 {
        self.health
    }

    /// Assign health, saturating into `[MIN_HEALTH, MAX_HEALTH]`
    pub fn set_health(&mut self, health: f64) {
        self.health = clamp_health(health);
    }

    pub fn care_plan(&self) -> &[CareAction] {
        &self.care_plan
    }
}

fn clamp_health(health: f64) -> f64 {
    // NaN stays NaN under f64::clamp; pin it to the floor instead.
    if health.is_nan() {
        MIN_HEALTH
    } else {
        health.clamp(MIN_HEALTH, MAX_HEALTH)
    }
}

impl std::fmt::Display for Flower {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Flower: {}, Color: {}, Height: {} cm, Health: {}%",
            self.name, self.color, self.height, self.health
        )
    }
}
