//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Unit timestep only
//! - Seeded RNG only
//! - Stable iteration order (population index)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod population;
pub mod tick;
pub mod vector;

pub use body::Body;
pub use collision::{CollisionOutcome, is_colliding, merge_or_bounce};
pub use population::{Population, PopulationStats};
pub use tick::{StepReport, step};
pub use vector::{Vector, add, magnitude, normalize, scale, sub};
