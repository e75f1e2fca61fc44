use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex, PoisonError,
};

use tracing::{debug, warn};

use super::store::{Store, StoreError, StoreKey};
use crate::{
    domain::{DimensionInputs, RateTable, Settings},
    i18n::Language,
};

impl Store {
    /// Restores settings, falling back to defaults record by record.
    pub fn load_settings(&self) -> Settings {
        let defaults = Settings::default();
        Settings {
            rates: self
                .read_json::<RateTable>(StoreKey::Rates)
                .unwrap_or(defaults.rates),
            language: self.load_language().unwrap_or(defaults.language),
            last_inputs: self
                .read_json::<DimensionInputs>(StoreKey::Inputs)
                .unwrap_or(defaults.last_inputs),
        }
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<(), StoreError> {
        self.write_json(StoreKey::Rates, &settings.rates)?;
        self.write_json(StoreKey::Language, &settings.language)?;
        self.write_json(StoreKey::Inputs, &settings.last_inputs)?;
        Ok(())
    }

    fn load_language(&self) -> Option<Language> {
        let raw = self.read_raw(StoreKey::Language)?;
        // Older stores kept the bare code without JSON quoting.
        let language = serde_json::from_str::<Language>(&raw)
            .ok()
            .or_else(|| Language::from_code(&raw));
        if language.is_none() {
            warn!("ignoring unknown language {raw:?}");
        }
        language
    }
}

/// Orders settings saves that run off the UI thread. Each edit queues a new
/// generation; a save only writes if no newer generation was queued, and
/// writes never overlap.
#[derive(Clone, Debug, Default)]
pub struct SettingsWriter {
    latest: Arc<AtomicU64>,
    write_lock: Arc<Mutex<()>>,
}

impl SettingsWriter {
    pub fn queue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Returns `Ok(false)` when the snapshot was superseded and skipped.
    pub fn save(
        &self,
        store: &Store,
        generation: u64,
        settings: &Settings,
    ) -> Result<bool, StoreError> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if self.latest.load(Ordering::Acquire) != generation {
            debug!(generation, "skipping superseded settings snapshot");
            return Ok(false);
        }
        store.save_settings(settings)?;
        Ok(true)
    }
}
