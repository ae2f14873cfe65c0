//! Circular body entity

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::vector::{Vector, add};
use crate::config::{Rgb, SimConfig};

/// A circle in the world
///
/// A radius of zero marks an absorbed body. Absorbed bodies keep their
/// slot in the population but are never updated, collided or drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Center of the circle
    pub position: Vector,
    pub radius: f32,
    /// Displacement per step
    pub velocity: Vector,
    pub color: Rgb,
}

impl Body {
    pub fn new(position: Vector, radius: f32, velocity: Vector, color: Rgb) -> Self {
        Self {
            position,
            radius,
            velocity,
            color,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.radius > 0.0
    }

    /// Mark as absorbed
    pub fn deactivate(&mut self) {
        self.radius = 0.0;
        self.velocity = Vec2::ZERO;
    }

    /// Advance one step and reflect off the world bounds
    pub fn update(&mut self, config: &SimConfig) {
        if !self.is_active() {
            return;
        }
        self.position = add(self.position, self.velocity);
        self.check_boundaries(config.width, config.height);
    }

    /// Clamp the circle tangent to any wall it crossed and flip that axis
    pub fn check_boundaries(&mut self, width: f32, height: f32) {
        if self.position.x - self.radius < 0.0 {
            self.position.x = self.radius;
            self.velocity.x = -self.velocity.x;
        }
        if self.position.x + self.radius > width {
            self.position.x = width - self.radius;
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y - self.radius < 0.0 {
            self.position.y = self.radius;
            self.velocity.y = -self.velocity.y;
        }
        if self.position.y + self.radius > height {
            self.position.y = height - self.radius;
            self.velocity.y = -self.velocity.y;
        }
    }

    /// Circle area
    pub fn area(&self) -> f32 {
        std::f32::consts::PI * self.radius * self.radius
    }

    /// Whether the whole circle lies inside `[0, width] x [0, height]`
    pub fn is_inside(&self, width: f32, height: f32) -> bool {
        self.position.x - self.radius >= 0.0
            && self.position.x + self.radius <= width
            && self.position.y - self.radius >= 0.0
            && self.position.y + self.radius <= height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(x: f32, y: f32, r: f32, vx: f32, vy: f32) -> Body {
        Body::new(Vec2::new(x, y), r, Vec2::new(vx, vy), Rgb::RED)
    }

    #[test]
    fn test_update_integrates_velocity() {
        let config = SimConfig::default();
        let mut b = body(400.0, 300.0, 20.0, 1.5, -2.0);
        b.update(&config);
        assert_eq!(b.position, Vec2::new(401.5, 298.0));
        assert_eq!(b.velocity, Vec2::new(1.5, -2.0));
    }

    #[test]
    fn test_left_wall_reflection() {
        let config = SimConfig::default();
        let mut b = body(21.0, 300.0, 20.0, -2.0, 0.0);
        b.update(&config);
        assert_eq!(b.position.x, 20.0);
        assert!(b.velocity.x > 0.0);
        assert_eq!(b.velocity.x, 2.0);
    }

    #[test]
    fn test_right_and_bottom_reflection() {
        let config = SimConfig::default();
        let mut b = body(779.0, 579.0, 20.0, 2.0, 2.0);
        b.update(&config);
        assert_eq!(b.position, Vec2::new(780.0, 580.0));
        assert_eq!(b.velocity, Vec2::new(-2.0, -2.0));
    }

    #[test]
    fn test_corner_reflects_both_axes() {
        let config = SimConfig::default();
        let mut b = body(21.0, 21.0, 20.0, -2.0, -2.0);
        b.update(&config);
        assert_eq!(b.position, Vec2::new(20.0, 20.0));
        assert_eq!(b.velocity, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_exact_tangency_does_not_reflect() {
        let config = SimConfig::default();
        let mut b = body(22.0, 300.0, 20.0, -2.0, 0.0);
        b.update(&config);
        assert_eq!(b.position.x, 20.0);
        assert_eq!(b.velocity.x, -2.0);
    }

    #[test]
    fn test_inactive_body_is_not_updated() {
        let config = SimConfig::default();
        let mut b = body(5.0, 5.0, 20.0, -3.0, 1.0);
        b.deactivate();
        let before = b.clone();
        b.update(&config);
        assert_eq!(b, before);
        assert!(!b.is_active());
        assert_eq!(b.velocity, Vec2::ZERO);
    }
}
