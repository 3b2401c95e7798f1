//! Form parameters and their validation.
//!
//! Front-ends hand over the six raw field strings exactly as typed; this module
//! decides whether they describe a buildable pack.

use crate::constants::{
    CORE_TOO_LARGE_MESSAGE, DEFAULT_CORE_DIAMETER, DEFAULT_LAYERS, DEFAULT_ROLLS_PER_ROW,
    DEFAULT_ROLL_DIAMETER, DEFAULT_ROLL_HEIGHT, DEFAULT_ROWS, INVALID_NUMBER_MESSAGE,
};
use std::fmt;
use thiserror::Error;

/// The six form fields, in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamField {
    RollDiameter,
    CoreDiameter,
    RollHeight,
    Rows,
    RollsPerRow,
    Layers,
}

impl ParamField {
    pub const ALL: [ParamField; 6] = [
        ParamField::RollDiameter,
        ParamField::CoreDiameter,
        ParamField::RollHeight,
        ParamField::Rows,
        ParamField::RollsPerRow,
        ParamField::Layers,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ParamField::RollDiameter => "roll diameter",
            ParamField::CoreDiameter => "core diameter",
            ParamField::RollHeight => "roll height",
            ParamField::Rows => "rows",
            ParamField::RollsPerRow => "rolls per row",
            ParamField::Layers => "layers",
        }
    }
}

impl fmt::Display for ParamField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", INVALID_NUMBER_MESSAGE)]
    InvalidNumber { field: ParamField },
    #[error("{}", CORE_TOO_LARGE_MESSAGE)]
    CoreTooLarge,
}

/// Raw text of the six form fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawPackInput {
    pub roll_diameter: String,
    pub core_diameter: String,
    pub roll_height: String,
    pub rows: String,
    pub rolls_per_row: String,
    pub layers: String,
}

impl RawPackInput {
    pub fn field(&self, field: ParamField) -> &str {
        match field {
            ParamField::RollDiameter => &self.roll_diameter,
            ParamField::CoreDiameter => &self.core_diameter,
            ParamField::RollHeight => &self.roll_height,
            ParamField::Rows => &self.rows,
            ParamField::RollsPerRow => &self.rolls_per_row,
            ParamField::Layers => &self.layers,
        }
    }

    pub fn field_mut(&mut self, field: ParamField) -> &mut String {
        match field {
            ParamField::RollDiameter => &mut self.roll_diameter,
            ParamField::CoreDiameter => &mut self.core_diameter,
            ParamField::RollHeight => &mut self.roll_height,
            ParamField::Rows => &mut self.rows,
            ParamField::RollsPerRow => &mut self.rolls_per_row,
            ParamField::Layers => &mut self.layers,
        }
    }
}

impl From<&PackParameters> for RawPackInput {
    fn from(p: &PackParameters) -> Self {
        Self {
            roll_diameter: p.roll_diameter.to_string(),
            core_diameter: p.core_diameter.to_string(),
            roll_height: p.roll_height.to_string(),
            rows: p.rows.to_string(),
            rolls_per_row: p.rolls_per_row.to_string(),
            layers: p.layers.to_string(),
        }
    }
}

/// Validated pack parameters. Counts are kept as entered and rounded on use.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PackParameters {
    pub roll_diameter: f32,
    pub core_diameter: f32,
    pub roll_height: f32,
    pub rows: f32,
    pub rolls_per_row: f32,
    pub layers: f32,
}

impl Default for PackParameters {
    fn default() -> Self {
        Self {
            roll_diameter: DEFAULT_ROLL_DIAMETER,
            core_diameter: DEFAULT_CORE_DIAMETER,
            roll_height: DEFAULT_ROLL_HEIGHT,
            rows: DEFAULT_ROWS,
            rolls_per_row: DEFAULT_ROLLS_PER_ROW,
            layers: DEFAULT_LAYERS,
        }
    }
}

/// Parse a field as a strictly positive, finite number.
///
/// Blank, non-numeric, `inf`/`NaN`, zero and negative values all yield `None`.
pub fn parse_positive(text: &str) -> Option<f32> {
    let value: f32 = text.trim().parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Parse a field as any finite number, used for slider values.
pub fn parse_finite(text: &str) -> Option<f32> {
    let value: f32 = text.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

pub fn validate(raw: &RawPackInput) -> Result<PackParameters, ValidationError> {
    let mut values = [0.0_f32; 6];
    for (slot, field) in values.iter_mut().zip(ParamField::ALL) {
        *slot = parse_positive(raw.field(field)).ok_or(ValidationError::InvalidNumber { field })?;
    }
    let [roll_diameter, core_diameter, roll_height, rows, rolls_per_row, layers] = values;
    if core_diameter >= roll_diameter {
        return Err(ValidationError::CoreTooLarge);
    }
    Ok(PackParameters {
        roll_diameter,
        core_diameter,
        roll_height,
        rows,
        rolls_per_row,
        layers,
    })
}
