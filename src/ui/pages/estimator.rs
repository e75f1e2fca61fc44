use dioxus::prelude::*;
use tracing::{error, warn};

use crate::{
    app::{calculate_and_record, persist_settings, Route},
    domain::{factor_for, AppState, DimensionInputs, MaterialKey, MATERIAL_FACTORS},
    i18n::{t, Language, Text},
    infra::{default_export_dir, ExportError, ExportGate, ExportKind, SettingsWriter, Store},
    ui::{
        components::{
            line_item_table::LineItemTable,
            toast::{push_alert, push_toast, ToastKind, ToastMessage},
        },
        theme::{self, ButtonKind},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InputField {
    Length,
    Breadth,
    Floors,
    Contingency,
}

impl InputField {
    fn text(&self) -> Text {
        match self {
            InputField::Length => Text::Length,
            InputField::Breadth => Text::Breadth,
            InputField::Floors => Text::Floors,
            InputField::Contingency => Text::Contingency,
        }
    }

    fn placeholder(&self) -> &'static str {
        match self {
            InputField::Floors => "1",
            _ => "10",
        }
    }

    fn value(&self, inputs: &DimensionInputs) -> String {
        match self {
            InputField::Length => inputs.length.clone(),
            InputField::Breadth => inputs.breadth.clone(),
            InputField::Floors => inputs.floors.clone(),
            InputField::Contingency => inputs.contingency.clone(),
        }
    }

    fn assign(&self, inputs: &mut DimensionInputs, value: String) {
        match self {
            InputField::Length => inputs.length = value,
            InputField::Breadth => inputs.breadth = value,
            InputField::Floors => inputs.floors = value,
            InputField::Contingency => inputs.contingency = value,
        }
    }
}

#[component]
pub fn EstimatorPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let store = use_context::<Store>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let exporting = use_signal(|| false);
    let nav = use_navigator();

    let language = state.with(|st| st.language());
    let latest = state.with(|st| st.latest.clone());
    let area_display = state.with(|st| format!("{:.2}", st.inputs().preview_area()));
    let rates_heading = t(language, Text::Rates);
    let calculate_label = t(language, Text::Calculate);
    let history_label = t(language, Text::History);
    let estimate_heading = t(language, Text::Estimate);

    let on_calculate = move |_| {
        let settings = state.with(|st| st.settings.clone());
        match calculate_and_record(&store, &settings) {
            Ok(record) => state.with_mut(|st| st.latest = Some(record)),
            Err(err) => {
                warn!("calculation rejected: {err}");
                push_alert(
                    toasts,
                    t(language, Text::Error),
                    t(language, Text::InvalidDimensions),
                );
            }
        }
    };

    rsx! {
        section { class: "card",
            h2 { class: "card-title", "Project Details" }
            div { class: "input-grid",
                DimensionField { field: InputField::Length }
                DimensionField { field: InputField::Breadth }
            }
            div { class: "input-grid",
                DimensionField { field: InputField::Floors }
                DimensionField { field: InputField::Contingency }
            }
            div { class: "area-display",
                span { "Total Area" }
                span { "{area_display} sq ft" }
            }
        }

        section { class: "card",
            h2 { class: "card-title", "{rates_heading}" }
            for factor in MATERIAL_FACTORS.iter() {
                RateField { material: factor.key }
            }
        }

        div { class: "actions",
            button {
                class: theme::button(ButtonKind::Primary),
                onclick: on_calculate,
                "{calculate_label}"
            }
            if latest.is_some() {
                div { class: "export-row",
                    ExportButton { kind: ExportKind::Report, exporting }
                    ExportButton { kind: ExportKind::Csv, exporting }
                }
            }
            button {
                class: theme::button(ButtonKind::Link),
                onclick: move |_| { nav.push(Route::History {}); },
                "📋 {history_label}"
            }
        }

        if let Some(record) = latest {
            section { class: "card",
                h2 { class: "card-title", "{estimate_heading}" }
                LineItemTable {
                    lines: record.line_items.clone(),
                    total: record.total,
                    language,
                }
            }
        }
    }
}

#[component]
fn DimensionField(field: InputField) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let store = use_context::<Store>();
    let writer = use_context::<SettingsWriter>();

    let language = state.with(|st| st.language());
    let label = t(language, field.text());
    let value = state.with(|st| field.value(st.inputs()));

    rsx! {
        div {
            label { class: "label", "{label}" }
            input {
                class: "input",
                r#type: "number",
                step: "any",
                value: "{value}",
                placeholder: field.placeholder(),
                oninput: move |evt: FormEvent| {
                    state.with_mut(|st| field.assign(st.inputs_mut(), evt.value()));
                    persist_settings(&store, &writer, &state);
                },
            }
        }
    }
}

#[component]
fn RateField(material: MaterialKey) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let store = use_context::<Store>();
    let writer = use_context::<SettingsWriter>();

    let factor = factor_for(material);
    let language = state.with(|st| st.language());
    let label = match language {
        Language::En => factor.label,
        Language::Hi => factor.label_hi,
    };
    let unit = factor.default_unit;
    let value = state.with(|st| st.rate_input(material));

    rsx! {
        div { class: "rate-row",
            div {
                div { "{label}" }
                span { class: "rate-unit", "per {unit}" }
            }
            div {
                span { "₹ " }
                input {
                    class: "rate-input",
                    r#type: "number",
                    step: "any",
                    value: "{value}",
                    placeholder: "0",
                    oninput: move |evt: FormEvent| {
                        state.with_mut(|st| st.set_rate_input(material, evt.value()));
                        persist_settings(&store, &writer, &state);
                    },
                }
            }
        }
    }
}

#[component]
fn ExportButton(kind: ExportKind, exporting: Signal<bool>) -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let gate = use_context::<ExportGate>();

    let language = state.with(|st| st.language());
    let label = match kind {
        ExportKind::Report => format!("📄 {}", t(language, Text::ExportPdf)),
        ExportKind::Csv => format!("📊 {}", t(language, Text::ExportCsv)),
    };
    let disabled = exporting() || gate.is_busy();

    let on_export = move |_| {
        let Some(record) = state.with(|st| st.latest.clone()) else {
            return;
        };
        let Some(ticket) = gate.try_begin() else {
            return;
        };
        let mut exporting = exporting;
        exporting.set(true);
        spawn(async move {
            let outcome = tokio::task::spawn_blocking(move || -> Result<_, ExportError> {
                let dir = default_export_dir()?;
                ticket.export(kind, &record, language, &dir)
            })
            .await;
            exporting.set(false);

            match outcome {
                Ok(Ok(path)) => push_toast(
                    toasts,
                    ToastKind::Success,
                    format!("{} {}", t(language, Text::Saved), path.display()),
                ),
                Ok(Err(err)) => {
                    error!(?kind, "export failed: {err}");
                    push_toast(toasts, ToastKind::Error, kind.failure_message(language));
                }
                Err(err) => {
                    error!(?kind, "export task aborted: {err}");
                    push_toast(toasts, ToastKind::Error, kind.failure_message(language));
                }
            }
        });
    };

    rsx! {
        button {
            class: theme::button(ButtonKind::Secondary),
            disabled: disabled,
            onclick: on_export,
            "{label}"
        }
    }
}
