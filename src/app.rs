use dioxus::{prelude::*, signals::Signal};
use tracing::{error, info, warn};

use crate::{
    domain::{calculate, AppState, EstimateError, EstimateRecord, Settings},
    infra::{ExportGate, SettingsWriter, Store},
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{EstimatorPage, HistoryDetailPage, HistoryPage},
        shell::Shell,
    },
    util::{assets, format::now_rfc3339},
};

const FALLBACK_STORE_DIR: &str = "build-cost-estimator";

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Estimator {},
    #[route("/history")]
    History {},
    #[route("/history/:index")]
    HistoryDetail { index: usize },
}

#[component]
pub fn App() -> Element {
    let store = use_hook(open_store);
    let state = use_signal({
        let store = store.clone();
        move || AppState::from_settings(store.load_settings())
    });
    use_context_provider(|| store.clone());
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);
    use_context_provider(ExportGate::default);
    use_context_provider(SettingsWriter::default);

    rsx! {
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

fn open_store() -> Store {
    match Store::open_default() {
        Ok(store) => {
            info!(root = %store.root().display(), "using settings store");
            store
        }
        Err(err) => {
            let fallback = std::env::temp_dir().join(FALLBACK_STORE_DIR);
            warn!(root = %fallback.display(), "falling back to temporary store: {err}");
            Store::at(fallback)
        }
    }
}

/// Saves the current settings on the blocking pool. Only the newest
/// snapshot reaches disk when edits arrive faster than writes.
pub fn persist_settings(store: &Store, writer: &SettingsWriter, state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.settings.clone());
    let generation = writer.queue();
    let store = store.clone();
    let writer = writer.clone();
    spawn(async move {
        let saved =
            tokio::task::spawn_blocking(move || writer.save(&store, generation, &snapshot)).await;
        match saved {
            Ok(Ok(_)) => {}
            Ok(Err(err)) => warn!("Failed to persist settings: {err}"),
            Err(err) => warn!("settings save task aborted: {err}"),
        }
    });
}

/// Runs one calculation for the current settings and records it in history.
/// Rejected input leaves history untouched; a failed history write is
/// logged and the result is still returned.
pub fn calculate_and_record(
    store: &Store,
    settings: &Settings,
) -> Result<EstimateRecord, EstimateError> {
    let record = calculate(&settings.last_inputs, &settings.rates, now_rfc3339())?;
    info!(
        total = record.total,
        area = ?record.area(),
        "estimate calculated"
    );
    if let Err(err) = store.append_history(record.clone()) {
        error!("Failed to save history: {err}");
    }
    Ok(record)
}

#[component]
pub fn Estimator() -> Element {
    rsx! { Shell { EstimatorPage {} } }
}

#[component]
pub fn History() -> Element {
    rsx! { Shell { HistoryPage {} } }
}

#[component]
pub fn HistoryDetail(index: usize) -> Element {
    rsx! { Shell { HistoryDetailPage { index } } }
}
