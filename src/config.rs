//! Simulation configuration
//!
//! World bounds, palette and spawn ranges are passed explicitly into
//! initialization and stepping. Loaded from JSON on native, with every field
//! optional (missing fields fall back to the defaults in [`crate::consts`]).

use std::fmt;
use std::path::Path;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// An opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const BLUE: Rgb = Rgb(0, 0, 255);
    pub const GREEN: Rgb = Rgb(0, 255, 0);
    pub const YELLOW: Rgb = Rgb(255, 255, 0);
    pub const PURPLE: Rgb = Rgb(128, 0, 128);

    /// Normalized RGBA with full opacity
    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
            1.0,
        ]
    }
}

/// The fixed set of colors bodies are drawn from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<Rgb>);

impl Default for Palette {
    fn default() -> Self {
        Self(vec![Rgb::RED, Rgb::BLUE, Rgb::GREEN, Rgb::YELLOW, Rgb::PURPLE])
    }
}

impl Palette {
    pub fn new(colors: Vec<Rgb>) -> Self {
        Self(colors)
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Uniformly pick one color (None only for an empty palette)
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Rgb> {
        self.0.choose(rng).copied()
    }
}

/// Reasons a configuration is rejected before a population is built
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read
    Io(std::io::Error),
    /// Config text is not valid JSON for [`SimConfig`]
    Parse(serde_json::Error),
    /// Width or height is not a positive finite number
    InvalidWorld { width: f32, height: f32 },
    /// Merge-vs-bounce needs at least two colors
    TooFewColors { count: usize },
    /// Population must hold at least one body
    NoBodies,
    /// Spawn radius range is empty or starts at zero
    InvalidRadiusRange { min: u32, max: u32 },
    /// Margin leaves no integer spawn position inside the world
    MarginTooLarge { margin: f32 },
    /// Speed bound must be non-negative and finite
    InvalidSpeed { max_speed: f32 },
    /// Merge cap must admit every spawn radius and fit inside the world
    InvalidMergeCap { max_radius: f32 },
    /// Driver cannot pace at zero steps per second
    ZeroStepRate,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read config: {e}"),
            Self::Parse(e) => write!(f, "failed to parse config: {e}"),
            Self::InvalidWorld { width, height } => {
                write!(f, "invalid world size {width}x{height}")
            }
            Self::TooFewColors { count } => {
                write!(f, "palette needs at least 2 colors (got {count})")
            }
            Self::NoBodies => write!(f, "body count must be at least 1"),
            Self::InvalidRadiusRange { min, max } => {
                write!(f, "invalid spawn radius range {min}..={max}")
            }
            Self::MarginTooLarge { margin } => {
                write!(f, "spawn margin {margin} leaves no room inside the world")
            }
            Self::InvalidSpeed { max_speed } => write!(f, "invalid max speed {max_speed}"),
            Self::InvalidMergeCap { max_radius } => {
                write!(f, "invalid merge radius cap {max_radius}")
            }
            Self::ZeroStepRate => write!(f, "step rate must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Immutable simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// World width (right boundary plane)
    pub width: f32,
    /// World height (bottom boundary plane)
    pub height: f32,
    pub palette: Palette,
    /// Number of bodies created at initialization
    pub body_count: usize,
    /// Minimum spawn distance from every wall
    pub spawn_margin: f32,
    /// Inclusive integer range for spawn radii
    pub min_spawn_radius: u32,
    pub max_spawn_radius: u32,
    /// Each spawn velocity component is uniform in [-max_speed, max_speed]
    pub max_speed: f32,
    /// Merge cap; excess area is discarded
    pub max_radius: f32,
    /// Driver pacing, steps per second
    pub step_rate: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            palette: Palette::default(),
            body_count: BODY_COUNT,
            spawn_margin: SPAWN_MARGIN,
            min_spawn_radius: MIN_SPAWN_RADIUS,
            max_spawn_radius: MAX_SPAWN_RADIUS,
            max_speed: MAX_SPAWN_SPEED,
            max_radius: MAX_RADIUS,
            step_rate: STEP_RATE,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Inclusive integer spawn range for x (center coordinate)
    pub fn spawn_x_range(&self) -> (i32, i32) {
        spawn_axis(self.spawn_margin, self.width)
    }

    /// Inclusive integer spawn range for y (center coordinate)
    pub fn spawn_y_range(&self) -> (i32, i32) {
        spawn_axis(self.spawn_margin, self.height)
    }

    /// Seconds per driver step
    pub fn step_dt(&self) -> f32 {
        1.0 / self.step_rate as f32
    }

    /// Reject configurations the engine cannot run
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.width) || !positive(self.height) {
            return Err(ConfigError::InvalidWorld {
                width: self.width,
                height: self.height,
            });
        }
        if self.palette.len() < 2 {
            return Err(ConfigError::TooFewColors {
                count: self.palette.len(),
            });
        }
        if self.body_count == 0 {
            return Err(ConfigError::NoBodies);
        }
        if self.min_spawn_radius == 0 || self.min_spawn_radius > self.max_spawn_radius {
            return Err(ConfigError::InvalidRadiusRange {
                min: self.min_spawn_radius,
                max: self.max_spawn_radius,
            });
        }
        let (x_lo, x_hi) = self.spawn_x_range();
        let (y_lo, y_hi) = self.spawn_y_range();
        if !self.spawn_margin.is_finite()
            || self.spawn_margin < 0.0
            || x_lo > x_hi
            || y_lo > y_hi
        {
            return Err(ConfigError::MarginTooLarge {
                margin: self.spawn_margin,
            });
        }
        // The sampled span [-max_speed, max_speed] must itself be finite
        if !(2.0 * self.max_speed).is_finite() || self.max_speed < 0.0 {
            return Err(ConfigError::InvalidSpeed {
                max_speed: self.max_speed,
            });
        }
        // Both walls must be reachable at once for the largest body
        let fits = 2.0 * self.max_radius <= self.width.min(self.height);
        if !self.max_radius.is_finite() || self.max_radius < self.max_spawn_radius as f32 || !fits {
            return Err(ConfigError::InvalidMergeCap {
                max_radius: self.max_radius,
            });
        }
        if self.step_rate == 0 {
            return Err(ConfigError::ZeroStepRate);
        }
        Ok(())
    }
}

fn spawn_axis(margin: f32, bound: f32) -> (i32, i32) {
    (margin.ceil() as i32, (bound - margin).floor() as i32)
}
