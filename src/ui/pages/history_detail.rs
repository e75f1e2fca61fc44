use dioxus::prelude::*;

use super::history::area_label;
use crate::{
    domain::{AppState, EstimateRecord},
    infra::Store,
    ui::components::{detail_row::DetailRow, line_item_table::LineItemTable},
    util::format::format_timestamp,
};

#[component]
pub fn HistoryDetailPage(index: usize) -> Element {
    let store = use_context::<Store>();
    let state = use_context::<Signal<AppState>>();
    let record = use_hook(move || store.load_history().into_iter().nth(index));
    let language = state.with(|st| st.language());

    let Some(record) = record else {
        return rsx! {
            div { class: "empty-state",
                h2 { class: "card-title", "Estimate not found" }
                p { class: "muted", "This entry is no longer in your history." }
            }
        };
    };

    rsx! {
        ProjectDetails { record: record.clone() }
        section { class: "card",
            h2 { class: "card-title", "Material Breakdown" }
            LineItemTable {
                lines: record.line_items.clone(),
                total: record.total,
                language,
            }
        }
    }
}

#[component]
fn ProjectDetails(record: EstimateRecord) -> Element {
    let date = format_timestamp(&record.timestamp, true);
    let dimensions = format!("{} × {} × {} ft", record.length, record.breadth, record.floors);
    let area = area_label(&record);
    let contingency = format!("{}%", record.contingency);

    rsx! {
        section { class: "card",
            h2 { class: "card-title", "Project Details" }
            DetailRow { label: "Date", value: date }
            DetailRow { label: "Dimensions", value: dimensions }
            DetailRow { label: "Total Area", value: area }
            DetailRow { label: "Contingency", value: contingency }
        }
    }
}
