use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::EstimateRecord,
    infra::Store,
    util::format::{format_inr, format_timestamp},
};

#[derive(Clone, PartialEq)]
struct HistoryCardView {
    index: usize,
    date: String,
    total: String,
    dimensions: String,
    area: String,
}

impl HistoryCardView {
    fn new(index: usize, record: &EstimateRecord) -> Self {
        Self {
            index,
            date: format_timestamp(&record.timestamp, false),
            total: format_inr(record.total),
            dimensions: format!("{} × {} × {} ft", record.length, record.breadth, record.floors),
            area: area_label(record),
        }
    }
}

pub(crate) fn area_label(record: &EstimateRecord) -> String {
    record
        .area()
        .map(|area| format!("{area:.2} sq ft"))
        .unwrap_or_else(|| "—".to_string())
}

#[component]
pub fn HistoryPage() -> Element {
    let store = use_context::<Store>();
    // Read from disk each time the page is opened.
    let history = use_signal(move || store.load_history());

    let cards = history
        .read()
        .iter()
        .enumerate()
        .map(|(index, record)| HistoryCardView::new(index, record))
        .collect::<Vec<_>>();

    if cards.is_empty() {
        return rsx! {
            div { class: "empty-state",
                h2 { class: "card-title", "No History Found" }
                p { class: "muted",
                    "Your calculation history will appear here once you start estimating construction costs."
                }
            }
        };
    }

    rsx! {
        for card in cards {
            HistoryCard { card }
        }
    }
}

#[component]
fn HistoryCard(card: HistoryCardView) -> Element {
    let nav = use_navigator();
    let index = card.index;

    rsx! {
        div {
            class: "card history-card",
            onclick: move |_| { nav.push(Route::HistoryDetail { index }); },
            div { class: "history-card-header",
                span { class: "muted", "{card.date}" }
                span { class: "history-total", "₹{card.total}" }
            }
            div { class: "history-card-header",
                span { "{card.dimensions}" }
                span { class: "muted", "Total: {card.area}" }
            }
        }
    }
}
