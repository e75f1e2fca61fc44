use dioxus::prelude::*;

#[component]
pub fn DetailRow(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "detail-row",
            span { class: "muted", "{label}" }
            span { "{value}" }
        }
    }
}
