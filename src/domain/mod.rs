//! Estimation logic: material factors, pricing, markup and the records that
//! come out of a calculation.

pub mod app_state;
pub mod calculation;
pub mod estimate;
pub mod inputs;
pub mod materials;
pub mod numeric;
pub mod rates;
pub mod settings;

#[allow(unused_imports)]
pub use app_state::AppState;
#[allow(unused_imports)]
pub use calculation::{calculate, EstimateRecord};
#[allow(unused_imports)]
pub use estimate::{
    apply_markup, compute_estimate, compute_grand_total, AlternateQuantity, LineItemResult,
};
#[allow(unused_imports)]
pub use inputs::{contingency_fraction, Dimension, DimensionInputs, EstimateError};
#[allow(unused_imports)]
pub use materials::{factor_for, MaterialFactor, MaterialKey, Unit, MATERIAL_FACTORS};
#[allow(unused_imports)]
pub use numeric::parse_leading_float;
#[allow(unused_imports)]
pub use rates::{parse_rate, RateTable};
#[allow(unused_imports)]
pub use settings::Settings;
