//! Single simulation step
//!
//! Each active body is moved, then checked against every other active body
//! in population order. Resolutions apply immediately, so a body that just
//! bounced or merged is checked against later partners with its new state
//! and one step can cascade several merges through the same body.

use super::body::Body;
use super::collision::{CollisionOutcome, is_colliding, merge_or_bounce};
use super::population::Population;
use crate::config::SimConfig;

/// Collisions resolved during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub merges: u32,
    pub bounces: u32,
}

impl StepReport {
    pub fn collisions(&self) -> u32 {
        self.merges + self.bounces
    }
}

/// Advance the population by one unit timestep
pub fn step(population: &mut Population, config: &SimConfig) -> StepReport {
    let mut report = StepReport::default();
    let bodies = &mut population.bodies;

    for i in 0..bodies.len() {
        if !bodies[i].is_active() {
            continue;
        }
        bodies[i].update(config);

        for j in 0..bodies.len() {
            if i == j {
                continue;
            }
            let Some((this, other)) = pair_mut(bodies, i, j) else {
                continue;
            };
            if !this.is_active() || !other.is_active() || !is_colliding(this, other) {
                continue;
            }
            match merge_or_bounce(this, other, config.max_radius) {
                CollisionOutcome::Merged => {
                    log::debug!("Body {} absorbed body {} (radius {:.1})", i, j, this.radius);
                    report.merges += 1;
                }
                CollisionOutcome::Bounced => {
                    log::trace!("Bodies {} and {} bounced", i, j);
                    report.bounces += 1;
                }
            }
        }
    }

    population.time_ticks += 1;
    report
}

/// Two distinct mutable bodies, in (i, j) order
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> Option<(&mut Body, &mut Body)> {
    if i == j || i >= bodies.len() || j >= bodies.len() {
        return None;
    }
    if i < j {
        let (head, tail) = bodies.split_at_mut(j);
        Some((&mut head[i], &mut tail[0]))
    } else {
        let (head, tail) = bodies.split_at_mut(i);
        Some((&mut tail[0], &mut head[j]))
    }
}
