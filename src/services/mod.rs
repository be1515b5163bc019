//! Services built on the domain model.
//!
//! This module contains:
//! - Garden: plants configured flowers and runs their care plans
//! - CareReport: the garden before and after a round of care

mod garden;

pub use garden::{CareReport, Garden};
