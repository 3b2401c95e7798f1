//! Text shown next to the form and sliders.

use crate::constants::READOUT_PLACEHOLDER;
use crate::layout::{compute_metrics, PackMetrics};
use crate::params::{validate, RawPackInput, ValidationError};

/// The three derived-metrics outputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsReadout {
    pub total_rolls: String,
    pub dimensions: String,
    pub footprint: String,
}

impl MetricsReadout {
    pub fn from_metrics(m: &PackMetrics) -> Self {
        let c = m.counts;
        Self {
            total_rolls: format!(
                "{} rolls ({} × {} × {})",
                m.total_rolls, c.rows, c.rolls_per_row, c.layers
            ),
            dimensions: format!(
                "Width: {:.1} mm, Depth: {:.1} mm, Height: {:.1} mm",
                m.pack_width, m.pack_depth, m.pack_height
            ),
            footprint: format!("{:.1} mm × {:.1} mm", m.pack_width, m.pack_depth),
        }
    }

    pub fn from_error(err: &ValidationError) -> Self {
        Self {
            total_rolls: err.to_string(),
            dimensions: READOUT_PLACEHOLDER.to_string(),
            footprint: READOUT_PLACEHOLDER.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.dimensions == READOUT_PLACEHOLDER
    }
}

/// Cheap path used while typing: validate and compute metrics, no geometry.
pub fn preview_metrics(raw: &RawPackInput) -> Result<PackMetrics, ValidationError> {
    validate(raw).map(|p| compute_metrics(&p))
}

pub fn preview_readout(raw: &RawPackInput) -> MetricsReadout {
    match preview_metrics(raw) {
        Ok(m) => MetricsReadout::from_metrics(&m),
        Err(e) => MetricsReadout::from_error(&e),
    }
}

/// Angle slider readout to a tenth of a degree, e.g. `"30°"` or `"-12.5°"`.
pub fn angle_readout(deg: f32) -> String {
    let tenths = (deg * 10.0).round() / 10.0;
    // + 0.0 turns -0 into 0
    format!("{}°", tenths + 0.0)
}

/// Distance / pan readout rounded to a whole number.
pub fn whole_readout(value: f32) -> String {
    format!("{}", value.round() + 0.0)
}
