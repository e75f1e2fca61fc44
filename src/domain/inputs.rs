use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::numeric::parse_leading_float;

/// Building dimensions exactly as the user typed them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionInputs {
    pub length: String,
    pub breadth: String,
    pub floors: String,
    /// Percentage, e.g. "10" for ten percent.
    pub contingency: String,
}

impl Default for DimensionInputs {
    fn default() -> Self {
        Self {
            length: "10".to_string(),
            breadth: "10".to_string(),
            floors: "1".to_string(),
            contingency: "10".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dimension {
    Length,
    Breadth,
    Floors,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dimension::Length => "length",
            Dimension::Breadth => "breadth",
            Dimension::Floors => "floors",
        })
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EstimateError {
    #[error("{field} must be a positive number (got {value:?})")]
    InvalidInput { field: Dimension, value: String },
}

/// Validated dimensions. All three values are finite and positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParsedDimensions {
    pub length: f64,
    pub breadth: f64,
    pub floors: f64,
}

impl ParsedDimensions {
    pub fn area_sqft(&self) -> f64 {
        self.length * self.breadth * self.floors
    }
}

impl DimensionInputs {
    pub fn parse(&self) -> Result<ParsedDimensions, EstimateError> {
        Ok(ParsedDimensions {
            length: positive(Dimension::Length, &self.length)?,
            breadth: positive(Dimension::Breadth, &self.breadth)?,
            floors: positive(Dimension::Floors, &self.floors)?,
        })
    }

    /// Area shown while typing; unparsable fields count as zero.
    pub fn preview_area(&self) -> f64 {
        [&self.length, &self.breadth, &self.floors]
            .iter()
            .map(|raw| parse_leading_float(raw).unwrap_or(0.0))
            .product()
    }

    pub fn contingency_fraction(&self) -> Option<f64> {
        contingency_fraction(&self.contingency)
    }
}

fn positive(field: Dimension, raw: &str) -> Result<f64, EstimateError> {
    match parse_leading_float(raw) {
        Some(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(EstimateError::InvalidInput {
            field,
            value: raw.to_string(),
        }),
    }
}

/// Converts a percentage string into a markup fraction. Returns `None` when
/// no markup should be applied.
pub fn contingency_fraction(percent: &str) -> Option<f64> {
    parse_leading_float(percent)
        .map(|value| value / 100.0)
        .filter(|fraction| fraction.is_finite() && *fraction > 0.0)
}
