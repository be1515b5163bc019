//! Domain entities for flower-care.
//!
//! This module contains the core model:
//! - Flower: a flower and the care plan it owns
//! - CareAction: one step of a care plan and its effect
//! - Species: fixed starting presets

mod action;
mod flower;
mod species;

pub use action::{CareAction, CareEffect, SUNLIGHT_HEALTH_PER_HOUR};
pub use flower::{Flower, MAX_HEALTH, MIN_HEALTH};
pub use species::{Species, SpeciesPreset};
