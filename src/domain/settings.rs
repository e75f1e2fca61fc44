use crate::i18n::Language;

use super::inputs::DimensionInputs;
use super::rates::RateTable;

/// User preferences restored at startup and saved after every edit.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub rates: RateTable,
    pub language: Language,
    pub last_inputs: DimensionInputs,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rates: RateTable::defaults(),
            language: Language::default(),
            last_inputs: DimensionInputs::default(),
        }
    }
}
