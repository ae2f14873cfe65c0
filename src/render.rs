//! Render extraction
//!
//! The simulation never draws. A renderer borrows the population between
//! steps and turns it into a flat instance buffer of filled circles.

use bytemuck::{Pod, Zeroable};

use crate::config::Rgb;
use crate::sim::{Body, Population};

/// One filled circle, laid out for direct upload as an instance buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub _pad: f32,
    pub color: [f32; 4],
}

impl CircleInstance {
    pub fn from_body(body: &Body) -> Self {
        Self {
            center: body.position.to_array(),
            radius: body.radius,
            _pad: 0.0,
            color: body.color.to_rgba(),
        }
    }

    /// Center truncated to whole pixels, as raster APIs expect
    pub fn pixel_center(&self) -> (i32, i32) {
        (self.center[0] as i32, self.center[1] as i32)
    }
}

/// Colors for the scene
pub mod colors {
    use super::Rgb;

    pub const BACKGROUND: Rgb = Rgb::WHITE;
}

/// Instances for every active body, in population order
pub fn extract_instances(population: &Population) -> Vec<CircleInstance> {
    population.active().map(CircleInstance::from_body).collect()
}

/// Raw bytes of an instance slice
pub fn instance_bytes(instances: &[CircleInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
