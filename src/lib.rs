//! flower-care: a small model of flowers and the care they receive
//!
//! A [`Flower`] owns an ordered care plan of [`CareAction`]s; `care()` applies
//! the plan in order, growing the flower, raising its (clamped) health and
//! prefixing its color. A [`Garden`] tends a configured set of flowers.

pub mod config;
pub mod domain;
pub mod error;
pub mod services;

pub use config::GardenConfig;
pub use domain::{CareAction, Flower, Species};
pub use error::{AppError, Result};
pub use services::{CareReport, Garden};
