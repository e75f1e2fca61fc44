use dioxus::prelude::*;

use crate::domain::LineItemResult;
use crate::i18n::{t, Language, Text};
use crate::util::format::format_inr;

#[derive(Clone, PartialEq)]
pub struct LineItemRow {
    pub label: String,
    pub quantity: String,
    pub alternates: Vec<String>,
    pub rate: String,
    pub cost: String,
}

impl LineItemRow {
    pub fn from_line(line: &LineItemResult, language: Language) -> Self {
        Self {
            label: language.line_label(line).to_string(),
            quantity: format!("{:.2} {}", line.qty, line.unit),
            alternates: line
                .alternate_quantities
                .iter()
                .map(|alt| format!("≈ {:.2} {}", alt.qty, alt.unit))
                .collect(),
            rate: format!("₹{:.2}", line.rate),
            cost: format!("₹{}", format_inr(line.cost)),
        }
    }
}

/// Bill of materials with a grand total banner.
#[component]
pub fn LineItemTable(lines: Vec<LineItemResult>, total: f64, language: Language) -> Element {
    let rows = lines
        .iter()
        .map(|line| LineItemRow::from_line(line, language))
        .collect::<Vec<_>>();
    let total_display = format_inr(total);
    let material_heading = t(language, Text::Material);
    let qty_heading = t(language, Text::Qty);
    let rate_heading = t(language, Text::Rate);
    let cost_heading = t(language, Text::Cost);
    let total_label = t(language, Text::TotalCost);

    rsx! {
        table {
            class: "result-table",
            thead {
                tr {
                    th { "{material_heading}" }
                    th { class: "num", "{qty_heading}" }
                    th { class: "num", "{rate_heading}" }
                    th { class: "num", "{cost_heading}" }
                }
            }
            tbody {
                for row in rows {
                    tr {
                        td { "{row.label}" }
                        td {
                            class: "num",
                            "{row.quantity}"
                            for alt in row.alternates.iter() {
                                span { class: "alt-qty", "{alt}" }
                            }
                        }
                        td { class: "num", "{row.rate}" }
                        td { class: "num", "{row.cost}" }
                    }
                }
            }
        }
        div {
            class: "total-banner",
            "{total_label}: ₹{total_display}"
        }
    }
}
