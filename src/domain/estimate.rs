use serde::{Deserialize, Serialize};

use super::materials::{MaterialKey, Unit, MATERIAL_FACTORS};
use super::rates::RateTable;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlternateQuantity {
    pub unit: Unit,
    pub qty: f64,
}

/// One material's quantity and cost for a given floor area.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemResult {
    pub key: MaterialKey,
    pub label: String,
    #[serde(rename = "labelHi")]
    pub localized_label: String,
    pub qty: f64,
    pub unit: Unit,
    pub rate: f64,
    pub cost: f64,
    #[serde(
        rename = "altUnits",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub alternate_quantities: Vec<AlternateQuantity>,
}

/// Base bill of materials for `area_sqft`, one line per material in table
/// order. The caller is responsible for validating the area.
pub fn compute_estimate(area_sqft: f64, rates: &RateTable) -> Vec<LineItemResult> {
    MATERIAL_FACTORS
        .iter()
        .map(|factor| {
            let qty = area_sqft * factor.factor_per_sqft;
            let rate = rates.get(factor.key);
            let alternate_quantities = factor
                .alternate_units
                .iter()
                .map(|alt| AlternateQuantity {
                    unit: alt.unit,
                    qty: (alt.convert)(qty),
                })
                .collect();
            LineItemResult {
                key: factor.key,
                label: factor.label.to_string(),
                localized_label: factor.label_hi.to_string(),
                qty,
                unit: factor.default_unit,
                rate,
                cost: qty * rate,
                alternate_quantities,
            }
        })
        .collect()
}

/// Sum of line costs. NaN costs propagate into the total.
pub fn compute_grand_total(lines: &[LineItemResult]) -> f64 {
    lines.iter().fold(0.0, |total, line| total + line.cost)
}

/// Scales quantities and costs by `1 + contingency`. Rates are per unit and
/// stay untouched. A contingency that is not strictly positive leaves the
/// lines as they are.
pub fn apply_markup(lines: &[LineItemResult], contingency: f64) -> Vec<LineItemResult> {
    if !(contingency > 0.0) {
        return lines.to_vec();
    }
    let scale = 1.0 + contingency;
    lines
        .iter()
        .map(|line| LineItemResult {
            qty: line.qty * scale,
            cost: line.cost * scale,
            alternate_quantities: line
                .alternate_quantities
                .iter()
                .map(|alt| AlternateQuantity {
                    unit: alt.unit,
                    qty: alt.qty * scale,
                })
                .collect(),
            ..line.clone()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::materials::sand_tons_to_cubic_metres;

    const EPS: f64 = 1e-6;

    fn reference_rates() -> RateTable {
        RateTable::defaults()
    }

    fn line(lines: &[LineItemResult], key: MaterialKey) -> &LineItemResult {
        lines.iter().find(|l| l.key == key).unwrap()
    }

    #[test]
    fn empty_rate_table_yields_zero_costs() {
        for area in [0.0, 1.0, 250.5, 1000.0] {
            let lines = compute_estimate(area, &RateTable::new());
            assert_eq!(lines.len(), MATERIAL_FACTORS.len());
            for (line, factor) in lines.iter().zip(MATERIAL_FACTORS.iter()) {
                assert_eq!(line.key, factor.key);
                assert_eq!(line.cost, 0.0);
                assert_eq!(line.rate, 0.0);
                assert_eq!(line.qty, area * factor.factor_per_sqft);
            }
        }
    }

    #[test]
    fn thousand_square_feet_reference_build() {
        let lines = compute_estimate(1000.0, &reference_rates());

        let cement = line(&lines, MaterialKey::Cement);
        assert!((cement.qty - 400.0).abs() < EPS);
        assert!((cement.cost - 152_000.0).abs() < EPS);

        let steel = line(&lines, MaterialKey::Steel);
        assert!((steel.qty - 4.0).abs() < EPS);
        assert!((steel.cost - 260_000.0).abs() < EPS);

        let expected_total: f64 = lines.iter().map(|l| l.cost).sum();
        assert!((compute_grand_total(&lines) - expected_total).abs() < EPS);
    }

    #[test]
    fn alternate_units_convert_base_quantity_not_area() {
        let lines = compute_estimate(1000.0, &reference_rates());
        let sand = line(&lines, MaterialKey::Sand);
        assert_eq!(sand.unit, Unit::Ton);
        assert_eq!(sand.alternate_quantities.len(), 1);
        assert_eq!(sand.alternate_quantities[0].unit, Unit::M3);
        assert!((sand.alternate_quantities[0].qty - sand_tons_to_cubic_metres(sand.qty)).abs() < EPS);
        assert!((sand.alternate_quantities[0].qty - 51.0).abs() < EPS);
        assert!(line(&lines, MaterialKey::Cement).alternate_quantities.is_empty());
    }

    #[test]
    fn grand_total_of_nothing_is_zero() {
        let total = compute_grand_total(&[]);
        assert_eq!(total, 0.0);
        assert!(total.is_sign_positive());
    }

    #[test]
    fn grand_total_propagates_nan() {
        let mut lines = compute_estimate(100.0, &reference_rates());
        lines[0].cost = f64::NAN;
        assert!(compute_grand_total(&lines).is_nan());
    }

    #[test]
    fn markup_scales_quantities_costs_and_alternates() {
        let base = compute_estimate(1000.0, &reference_rates());
        let marked = apply_markup(&base, 0.10);
        for (before, after) in base.iter().zip(marked.iter()) {
            assert!((after.qty - before.qty * 1.1).abs() < EPS);
            assert!((after.cost - before.cost * 1.1).abs() < EPS);
            assert_eq!(after.rate, before.rate);
            assert!((after.cost - after.qty * after.rate).abs() < 1e-3);
            for (a, b) in before
                .alternate_quantities
                .iter()
                .zip(after.alternate_quantities.iter())
            {
                assert!((b.qty - a.qty * 1.1).abs() < EPS);
            }
        }
    }

    #[test]
    fn markup_is_identity_for_non_positive_contingency() {
        let base = compute_estimate(500.0, &reference_rates());
        assert_eq!(apply_markup(&base, 0.0), base);
        assert_eq!(apply_markup(&base, -0.2), base);
        assert_eq!(apply_markup(&base, f64::NAN), base);
        assert_eq!(apply_markup(&apply_markup(&base, 0.0), 0.0), base);
    }

    #[test]
    fn markup_compounds_when_reapplied() {
        let base = compute_estimate(1000.0, &reference_rates());
        let twice = apply_markup(&apply_markup(&base, 0.1), 0.1);
        for (before, after) in base.iter().zip(twice.iter()) {
            assert!((after.qty - before.qty * 1.1_f64.powi(2)).abs() < EPS);
        }
    }

    #[test]
    fn markup_does_not_mutate_input() {
        let base = compute_estimate(1000.0, &reference_rates());
        let snapshot = base.clone();
        let _ = apply_markup(&base, 0.25);
        assert_eq!(base, snapshot);
    }

    #[test]
    fn line_items_use_persisted_field_names() {
        let lines = compute_estimate(10.0, &reference_rates());
        let sand = serde_json::to_value(line(&lines, MaterialKey::Sand)).unwrap();
        assert_eq!(sand["key"], "sand");
        assert_eq!(sand["labelHi"], "रेत");
        assert_eq!(sand["altUnits"][0]["unit"], "m3");
        let cement = serde_json::to_value(line(&lines, MaterialKey::Cement)).unwrap();
        assert!(cement.get("altUnits").is_none());
    }
}
