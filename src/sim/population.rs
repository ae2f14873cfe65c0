//! Body population and seeded initialization
//!
//! The population is created once and never grows or shrinks. Absorbed
//! bodies stay in their slot with radius zero.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::config::{ConfigError, SimConfig};

/// Aggregate numbers for logging
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopulationStats {
    pub active: usize,
    pub absorbed: usize,
    /// Sum of active circle areas
    pub total_area: f32,
    pub largest_radius: f32,
}

/// The fixed, ordered set of bodies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Population {
    /// Seed the bodies were generated from (None when built by hand)
    pub seed: Option<u64>,
    /// Steps taken so far
    pub time_ticks: u64,
    /// Bodies in iteration order
    pub bodies: Vec<Body>,
}

impl Population {
    /// Wrap an explicit body list
    pub fn from_bodies(bodies: Vec<Body>) -> Self {
        Self {
            seed: None,
            time_ticks: 0,
            bodies,
        }
    }

    /// Build `config.body_count` randomized bodies
    ///
    /// Positions and radii are whole numbers, velocity components are
    /// continuous. The config is validated first so every range is non-empty.
    pub fn initialize<R: Rng + ?Sized>(config: &SimConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;

        let (x_lo, x_hi) = config.spawn_x_range();
        let (y_lo, y_hi) = config.spawn_y_range();
        let speed = config.max_speed;

        let mut bodies = Vec::with_capacity(config.body_count);
        for _ in 0..config.body_count {
            let x = rng.random_range(x_lo..=x_hi) as f32;
            let y = rng.random_range(y_lo..=y_hi) as f32;
            let radius = rng.random_range(config.min_spawn_radius..=config.max_spawn_radius) as f32;
            let color = config.palette.choose(rng).ok_or(ConfigError::TooFewColors {
                count: config.palette.len(),
            })?;
            let velocity = Vec2::new(
                rng.random_range(-speed..=speed),
                rng.random_range(-speed..=speed),
            );
            bodies.push(Body::new(Vec2::new(x, y), radius, velocity, color));
        }

        log::info!(
            "Initialized {} bodies in {}x{} world",
            bodies.len(),
            config.width,
            config.height
        );

        Ok(Self::from_bodies(bodies))
    }

    /// Deterministic initialization from a seed
    pub fn from_seed(config: &SimConfig, seed: u64) -> Result<Self, ConfigError> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut population = Self::initialize(config, &mut rng)?;
        population.seed = Some(seed);
        Ok(population)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Bodies that should be drawn, in population order
    pub fn active(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter().filter(|b| b.is_active())
    }

    pub fn stats(&self) -> PopulationStats {
        let mut stats = PopulationStats {
            active: 0,
            absorbed: 0,
            total_area: 0.0,
            largest_radius: 0.0,
        };
        for body in &self.bodies {
            if body.is_active() {
                stats.active += 1;
                stats.total_area += body.area();
                stats.largest_radius = stats.largest_radius.max(body.radius);
            } else {
                stats.absorbed += 1;
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Palette;

    #[test]
    fn test_initialize_respects_ranges() {
        let config = SimConfig {
            body_count: 200,
            ..Default::default()
        };
        let population = Population::from_seed(&config, 12345).unwrap();
        assert_eq!(population.len(), 200);
        assert_eq!(population.seed, Some(12345));

        for body in &population.bodies {
            assert!((100.0..=700.0).contains(&body.position.x));
            assert!((100.0..=500.0).contains(&body.position.y));
            assert_eq!(body.position.x.fract(), 0.0);
            assert!((20.0..=50.0).contains(&body.radius));
            assert_eq!(body.radius.fract(), 0.0);
            assert!(body.velocity.x.abs() <= 2.0 && body.velocity.y.abs() <= 2.0);
            assert!(config.palette.colors().contains(&body.color));
        }
    }

    #[test]
    fn test_initialize_is_deterministic() {
        let config = SimConfig::default();
        let a = Population::from_seed(&config, 99999).unwrap();
        let b = Population::from_seed(&config, 99999).unwrap();
        assert_eq!(a.bodies, b.bodies);

        let c = Population::from_seed(&config, 1).unwrap();
        assert_ne!(a.bodies, c.bodies);
    }

    #[test]
    fn test_initialize_rejects_invalid_config() {
        let config = SimConfig {
            palette: Palette::new(Vec::new()),
            ..Default::default()
        };
        assert!(matches!(
            Population::from_seed(&config, 7),
            Err(ConfigError::TooFewColors { count: 0 })
        ));
    }

    #[test]
    fn test_initialize_rejects_overflowing_speed() {
        let config = SimConfig {
            max_speed: f32::MAX,
            ..Default::default()
        };
        assert!(matches!(
            Population::from_seed(&config, 1),
            Err(ConfigError::InvalidSpeed { .. })
        ));
    }

    #[test]
    fn test_stats_skip_absorbed() {
        let config = SimConfig::default();
        let mut population = Population::from_seed(&config, 42).unwrap();
        population.bodies[0].radius = 10.0;
        population.bodies[1].deactivate();

        let stats = population.stats();
        assert_eq!(stats.active, config.body_count - 1);
        assert_eq!(stats.absorbed, 1);
        assert!(stats.largest_radius >= 10.0);
        assert_eq!(population.active().count(), config.body_count - 1);
    }
}
