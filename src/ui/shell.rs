use dioxus::prelude::*;

use crate::app::{persist_settings, Route};
use crate::domain::AppState;
use crate::i18n::{t, Text};
use crate::infra::{SettingsWriter, Store};
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let store = use_context::<Store>();
    let writer = use_context::<SettingsWriter>();
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let language = state.with(|st| st.language());
    let title = t(language, Text::Title);
    let history_label = t(language, Text::History);
    let toggle_label = language.toggle_label();
    let version = version_label();

    rsx! {
        header {
            class: "shell-header",
            h1 { class: "shell-title", "{title}" }
            nav {
                class: "shell-nav",
                NavButton {
                    active: matches!(current_route, Route::Estimator {}),
                    onclick: move |_| { nav.push(Route::Estimator {}); },
                    label: "🏠",
                }
                NavButton {
                    active: matches!(current_route, Route::History {} | Route::HistoryDetail { .. }),
                    onclick: move |_| { nav.push(Route::History {}); },
                    label: history_label,
                }
                button {
                    class: theme::button(theme::ButtonKind::Secondary),
                    onclick: move |_| {
                        state.with_mut(|st| st.toggle_language());
                        persist_settings(&store, &writer, &state);
                    },
                    "{toggle_label}"
                }
            }
        }
        main { class: "shell-main",
            {children}
        }
        footer { class: "shell-footer muted", "{APP_NAME} {version}" }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let kind = if active {
        theme::ButtonKind::Primary
    } else {
        theme::ButtonKind::Link
    };

    rsx! {
        button {
            class: theme::button(kind),
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
