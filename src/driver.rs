//! Fixed-rate driver
//!
//! Converts variable wall-clock frame times into whole simulation steps at
//! the configured step rate. Rendering and shutdown polling happen between
//! calls to [`Driver::update`], never during one.

use crate::config::{ConfigError, SimConfig};
use crate::consts::MAX_SUBSTEPS;
use crate::sim::{Population, StepReport, step};

/// Owns the population and paces it
#[derive(Debug, Clone)]
pub struct Driver {
    pub config: SimConfig,
    pub population: Population,
    accumulator: f32,
    step_dt: f32,
}

impl Driver {
    /// Validate the config, then seed a fresh population
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        let population = Population::from_seed(&config, seed)?;
        Ok(Self::with_population(config, population))
    }

    pub fn with_population(config: SimConfig, population: Population) -> Self {
        let step_dt = config.step_dt();
        Self {
            config,
            population,
            accumulator: 0.0,
            step_dt,
        }
    }

    /// Seconds per step
    pub fn step_dt(&self) -> f32 {
        self.step_dt
    }

    /// Advance by `dt` seconds of wall-clock time
    ///
    /// Runs as many whole steps as fit in the accumulated time, at most
    /// [`MAX_SUBSTEPS`] per call; leftover time carries into the next frame.
    pub fn update(&mut self, dt: f32) -> StepReport {
        // A NaN frame would poison the accumulator for good
        let dt = if dt.is_finite() { dt.clamp(0.0, 0.1) } else { 0.0 };
        self.accumulator += dt;

        let mut report = StepReport::default();
        let mut substeps = 0;
        while self.accumulator >= self.step_dt && substeps < MAX_SUBSTEPS {
            let r = step(&mut self.population, &self.config);
            report.merges += r.merges;
            report.bounces += r.bounces;
            self.accumulator -= self.step_dt;
            substeps += 1;
        }

        if substeps == MAX_SUBSTEPS && self.accumulator >= self.step_dt {
            log::warn!(
                "Driver fell behind, dropping {:.3}s of simulation time",
                self.accumulator
            );
            self.accumulator = 0.0;
        }

        report
    }
}
