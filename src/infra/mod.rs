//! Disk-backed collaborators: the settings/history store and file export.

pub mod export;
pub mod history_store;
pub mod settings_store;
pub mod store;

#[allow(unused_imports)]
pub use export::{default_export_dir, ExportError, ExportGate, ExportKind};
#[allow(unused_imports)]
pub use history_store::HISTORY_LIMIT;
#[allow(unused_imports)]
pub use settings_store::SettingsWriter;
#[allow(unused_imports)]
pub use store::{Store, StoreError};
