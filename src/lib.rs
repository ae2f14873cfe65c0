//! Chroma Merge - a box of colored circles
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, boundary reflection, merge-or-bounce)
//! - `config`: World bounds, palette and spawn ranges
//! - `render`: Read-only instance extraction for an external renderer
//! - `driver`: Fixed-rate stepping from wall-clock frame time

pub mod config;
pub mod driver;
pub mod render;
pub mod sim;

pub use config::{ConfigError, Palette, Rgb, SimConfig};
pub use driver::Driver;
pub use sim::{Body, Population, StepReport, step};

/// Default configuration constants
pub mod consts {
    /// World dimensions (pixels)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Bodies spawn at least this far from every wall
    pub const SPAWN_MARGIN: f32 = 100.0;

    /// Body defaults
    pub const BODY_COUNT: usize = 10;
    pub const MIN_SPAWN_RADIUS: u32 = 20;
    pub const MAX_SPAWN_RADIUS: u32 = 50;
    /// Each velocity component is drawn from [-MAX_SPAWN_SPEED, MAX_SPAWN_SPEED]
    pub const MAX_SPAWN_SPEED: f32 = 2.0;

    /// A merge never grows a body past this radius
    pub const MAX_RADIUS: f32 = 100.0;

    /// Driver pacing (steps per second)
    pub const STEP_RATE: u32 = 60;
    /// Maximum steps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}
