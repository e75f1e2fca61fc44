use tracing::info;

use super::store::{Store, StoreError, StoreKey};
use crate::domain::EstimateRecord;

/// Number of calculations kept, newest first.
pub const HISTORY_LIMIT: usize = 50;

impl Store {
    /// Past estimates, newest first. Missing or corrupt history reads as empty.
    pub fn load_history(&self) -> Vec<EstimateRecord> {
        self.read_json(StoreKey::History).unwrap_or_default()
    }

    /// Puts `record` in front, evicts anything past [`HISTORY_LIMIT`] and
    /// replaces the stored list. Returns the new history.
    pub fn append_history(&self, record: EstimateRecord) -> Result<Vec<EstimateRecord>, StoreError> {
        let mut history = self.load_history();
        history.insert(0, record);
        history.truncate(HISTORY_LIMIT);
        self.write_json(StoreKey::History, &history)?;
        info!(entries = history.len(), "history updated");
        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::domain::{calculate, DimensionInputs, RateTable};
    use crate::infra::store::tests::test_store;

    use super::*;

    fn record(stamp: usize) -> EstimateRecord {
        calculate(
            &DimensionInputs::default(),
            &RateTable::defaults(),
            format!("2026-10-18T09:{:02}:{:02}Z", stamp / 60, stamp % 60),
        )
        .unwrap()
    }

    #[test]
    fn empty_store_has_no_history() {
        let store = test_store("history_empty");
        assert!(store.load_history().is_empty());
    }

    #[test]
    fn newest_record_comes_first() {
        let store = test_store("history_order");
        store.append_history(record(1)).unwrap();
        store.append_history(record(2)).unwrap();
        let history = store.load_history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], record(2));
        assert_eq!(history[1], record(1));
        let _ = fs::remove_dir_all(store.root());
    }

    #[test]
    fn history_is_capped() {
        let store = test_store("history_cap");
        for stamp in 0..(HISTORY_LIMIT + 7) {
            let history = store.append_history(record(stamp)).unwrap();
            assert!(history.len() <= HISTORY_LIMIT);
            assert_eq!(history[0], record(stamp));
        }
        let history = store.load_history();
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history[0], record(HISTORY_LIMIT + 6));
        assert_eq!(history[HISTORY_LIMIT - 1], record(7));
        let _ = fs::remove_dir_all(store.root());
    }

    #[test]
    fn corrupt_history_reads_as_empty_and_is_replaced() {
        let store = test_store("history_corrupt");
        fs::create_dir_all(store.root()).unwrap();
        fs::write(store.path(StoreKey::History), "{\"oops\": true}").unwrap();
        assert!(store.load_history().is_empty());

        store.append_history(record(3)).unwrap();
        assert_eq!(store.load_history(), vec![record(3)]);
        let _ = fs::remove_dir_all(store.root());
    }

    #[test]
    fn reads_history_with_integer_amounts() {
        let store = test_store("history_legacy");
        fs::create_dir_all(store.root()).unwrap();
        let legacy = r#"[{
            "timestamp": "2026-01-02T03:04:05.000Z",
            "length": "10", "breadth": "10", "floors": "1", "contingency": "10",
            "results": [{
                "key": "sand", "label": "Sand", "labelHi": "रेत",
                "qty": 8.976, "unit": "ton", "rate": 1500, "cost": 13464,
                "altUnits": [{"unit": "m3", "qty": 5.61}]
            }],
            "total": 13464
        }]"#;
        fs::write(store.path(StoreKey::History), legacy).unwrap();
        let history = store.load_history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].line_items[0].alternate_quantities[0].qty, 5.61);
        assert_eq!(history[0].total, 13464.0);
        let _ = fs::remove_dir_all(store.root());
    }
}
