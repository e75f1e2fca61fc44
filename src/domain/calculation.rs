use serde::{Deserialize, Serialize};

use super::estimate::{apply_markup, compute_estimate, compute_grand_total, LineItemResult};
use super::inputs::{DimensionInputs, EstimateError};
use super::rates::RateTable;

/// Snapshot of one successful calculation, as kept in history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EstimateRecord {
    /// RFC 3339 creation time.
    pub timestamp: String,
    pub length: String,
    pub breadth: String,
    pub floors: String,
    #[serde(alias = "contingencyPercent")]
    pub contingency: String,
    #[serde(rename = "results", alias = "lineItems")]
    pub line_items: Vec<LineItemResult>,
    pub total: f64,
}

impl EstimateRecord {
    /// Floor area recomputed from the stored strings.
    pub fn area(&self) -> Option<f64> {
        let inputs = self.inputs();
        inputs.parse().ok().map(|dims| dims.area_sqft())
    }

    pub fn inputs(&self) -> DimensionInputs {
        DimensionInputs {
            length: self.length.clone(),
            breadth: self.breadth.clone(),
            floors: self.floors.clone(),
            contingency: self.contingency.clone(),
        }
    }
}

/// Validates the dimensions, prices the bill of materials, applies the
/// contingency markup and packages the result.
pub fn calculate(
    inputs: &DimensionInputs,
    rates: &RateTable,
    timestamp: String,
) -> Result<EstimateRecord, EstimateError> {
    let dims = inputs.parse()?;
    let base = compute_estimate(dims.area_sqft(), rates);
    let line_items = match inputs.contingency_fraction() {
        Some(fraction) => apply_markup(&base, fraction),
        None => base,
    };
    let total = compute_grand_total(&line_items);

    Ok(EstimateRecord {
        timestamp,
        length: inputs.length.clone(),
        breadth: inputs.breadth.clone(),
        floors: inputs.floors.clone(),
        contingency: inputs.contingency.clone(),
        line_items,
        total,
    })
}
