//! Grid layout of rolls inside the pack and the metrics derived from it.
//!
//! Coordinates are right-handed with Y up. X runs across rows, Z across the
//! rolls of one row, Y up through the layers. The pack is centred on the
//! origin horizontally and rests on `y = 0`.

use crate::params::PackParameters;
use glam::Vec3;

// upfront reservation limit; larger grids grow on push
const CAPACITY_HINT_LIMIT: u64 = 1 << 16;

/// Count of a grid axis after rounding the entered value.
#[inline]
pub fn round_count(value: f32) -> u32 {
    // f32::round is half-away-from-zero; `as` saturates huge values
    value.round() as u32
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridCounts {
    pub rows: u32,
    pub rolls_per_row: u32,
    pub layers: u32,
}

impl GridCounts {
    pub fn from_params(params: &PackParameters) -> Self {
        Self {
            rows: round_count(params.rows),
            rolls_per_row: round_count(params.rolls_per_row),
            layers: round_count(params.layers),
        }
    }

    pub fn total(&self) -> u64 {
        (self.rows as u64)
            .saturating_mul(self.rolls_per_row as u64)
            .saturating_mul(self.layers as u64)
    }

    /// Grid coordinates `(layer, row, column)` of the i-th placement.
    ///
    /// Inverse of the layer → row → column enumeration used by
    /// [`build_layout`].
    pub fn unravel(&self, index: usize) -> (u32, u32, u32) {
        let per_row = self.rolls_per_row.max(1) as usize;
        let per_layer = per_row * self.rows.max(1) as usize;
        let layer = index / per_layer;
        let rem = index % per_layer;
        (layer as u32, (rem / per_row) as u32, (rem % per_row) as u32)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PackMetrics {
    pub counts: GridCounts,
    pub total_rolls: u64,
    pub pack_width: f32,
    pub pack_depth: f32,
    pub pack_height: f32,
}

impl PackMetrics {
    /// Horizontal extent (width, depth).
    pub fn footprint(&self) -> (f32, f32) {
        (self.pack_width, self.pack_depth)
    }

    /// Anchor the camera orbits around: the pack's vertical midpoint.
    pub fn target_center(&self) -> Vec3 {
        Vec3::new(0.0, self.pack_height / 2.0, 0.0)
    }
}

pub fn compute_metrics(params: &PackParameters) -> PackMetrics {
    let counts = GridCounts::from_params(params);
    PackMetrics {
        counts,
        total_rolls: counts.total(),
        pack_width: counts.rows as f32 * params.roll_diameter,
        pack_depth: counts.rolls_per_row as f32 * params.roll_diameter,
        pack_height: counts.layers as f32 * params.roll_height,
    }
}

/// One roll (and its core) in the pack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub layer: u32,
    pub row: u32,
    pub column: u32,
    pub center: Vec3,
}

/// Axis-aligned box enclosing the whole pack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingEnvelope {
    pub size: Vec3,
}

impl BoundingEnvelope {
    pub fn center(&self) -> Vec3 {
        Vec3::new(0.0, self.size.y / 2.0, 0.0)
    }

    pub fn min(&self) -> Vec3 {
        Vec3::new(-self.size.x / 2.0, 0.0, -self.size.z / 2.0)
    }

    pub fn max(&self) -> Vec3 {
        Vec3::new(self.size.x / 2.0, self.size.y, self.size.z / 2.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PackLayout {
    pub params: PackParameters,
    pub metrics: PackMetrics,
    pub placements: Vec<Placement>,
    pub envelope: BoundingEnvelope,
}

impl PackLayout {
    pub fn centers(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.placements.iter().map(|p| p.center)
    }
}

pub fn build_layout(params: &PackParameters) -> PackLayout {
    let metrics = compute_metrics(params);
    let GridCounts {
        rows,
        rolls_per_row,
        layers,
    } = metrics.counts;

    let roll_radius = params.roll_diameter / 2.0;
    let start_x = -metrics.pack_width / 2.0 + roll_radius;
    let start_z = -metrics.pack_depth / 2.0 + roll_radius;
    let start_y = params.roll_height / 2.0;

    let mut placements = Vec::with_capacity(metrics.total_rolls.min(CAPACITY_HINT_LIMIT) as usize);
    for layer in 0..layers {
        let y = start_y + layer as f32 * params.roll_height;
        for row in 0..rows {
            let x = start_x + row as f32 * params.roll_diameter;
            for column in 0..rolls_per_row {
                let z = start_z + column as f32 * params.roll_diameter;
                placements.push(Placement {
                    layer,
                    row,
                    column,
                    center: Vec3::new(x, y, z),
                });
            }
        }
    }

    PackLayout {
        params: *params,
        metrics,
        placements,
        envelope: BoundingEnvelope {
            size: Vec3::new(metrics.pack_width, metrics.pack_height, metrics.pack_depth),
        },
    }
}
