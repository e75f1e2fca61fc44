use super::calculation::EstimateRecord;
use super::inputs::DimensionInputs;
use super::materials::MaterialKey;
use super::settings::Settings;
use crate::i18n::Language;

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub settings: Settings,
    /// Result of the most recent calculation, if any.
    pub latest: Option<EstimateRecord>,
}

impl AppState {
    pub fn from_settings(settings: Settings) -> Self {
        Self {
            settings,
            latest: None,
        }
    }

    pub fn language(&self) -> Language {
        self.settings.language
    }

    pub fn inputs(&self) -> &DimensionInputs {
        &self.settings.last_inputs
    }

    pub fn inputs_mut(&mut self) -> &mut DimensionInputs {
        &mut self.settings.last_inputs
    }

    pub fn rate_input(&self, key: MaterialKey) -> String {
        self.settings.rates.text(key).to_string()
    }

    pub fn set_rate_input(&mut self, key: MaterialKey, text: String) {
        self.settings.rates.set_from_text(key, text);
    }

    pub fn toggle_language(&mut self) {
        self.settings.language = self.settings.language.toggle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_fields_mirror_settings() {
        let state = AppState::from_settings(Settings::default());
        assert_eq!(state.rate_input(MaterialKey::Cement), "380");
        assert_eq!(state.rate_input(MaterialKey::Steel), "65000");
        assert_eq!(state.rate_input(MaterialKey::Paint), "250");
    }

    #[test]
    fn editing_a_rate_updates_parsed_table() {
        let mut state = AppState::from_settings(Settings::default());
        state.set_rate_input(MaterialKey::Tile, "42.5".to_string());
        assert_eq!(state.settings.rates.get(MaterialKey::Tile), 42.5);

        state.set_rate_input(MaterialKey::Tile, "4x".to_string());
        assert_eq!(state.settings.rates.get(MaterialKey::Tile), 4.0);
        assert_eq!(state.rate_input(MaterialKey::Tile), "4x");

        state.set_rate_input(MaterialKey::Tile, "x4".to_string());
        assert_eq!(state.settings.rates.get(MaterialKey::Tile), 0.0);
    }

    #[test]
    fn toggling_language_updates_settings() {
        let mut state = AppState::default();
        state.toggle_language();
        assert_eq!(state.language(), Language::Hi);
    }
}
