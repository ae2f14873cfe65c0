//! Collision detection and merge-or-bounce response
//!
//! Same-colored circles merge: the first body of the pair absorbs the
//! second, keeping the combined area up to the radius cap. Differently
//! colored circles are pushed apart along the line between their centers
//! and trade velocities outright.

use std::f32::consts::PI;

use super::body::Body;
use super::vector::{add, magnitude, normalize, scale, sub};

/// Which branch resolved a colliding pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// `other` was absorbed into `this`
    Merged,
    /// Bodies were separated and velocities swapped
    Bounced,
}

/// Strict overlap test: exact tangency is not a collision
#[inline]
pub fn is_colliding(a: &Body, b: &Body) -> bool {
    magnitude(sub(a.position, b.position)) < a.radius + b.radius
}

/// Resolve a colliding pair, mutating both bodies
pub fn merge_or_bounce(this: &mut Body, other: &mut Body, max_radius: f32) -> CollisionOutcome {
    if this.color == other.color {
        merge(this, other, max_radius);
        CollisionOutcome::Merged
    } else {
        bounce(this, other);
        CollisionOutcome::Bounced
    }
}

/// Area-preserving absorption of `other` into `this`, capped at `max_radius`
pub fn merge(this: &mut Body, other: &mut Body, max_radius: f32) {
    let total_area = PI * this.radius * this.radius + PI * other.radius * other.radius;
    let new_radius = (total_area / PI).sqrt().min(max_radius);
    this.radius = new_radius;
    other.deactivate();
}

/// Separate by half the overlap each, then exchange velocities
pub fn bounce(this: &mut Body, other: &mut Body) {
    let collision_vector = sub(this.position, other.position);
    // Zero when centers coincide, so no positional correction happens
    let collision_normal = normalize(collision_vector);
    let overlap = this.radius + other.radius - magnitude(collision_vector);
    let push = scale(collision_normal, overlap / 2.0);

    this.position = add(this.position, push);
    other.position = sub(other.position, push);

    std::mem::swap(&mut this.velocity, &mut other.velocity);
}
