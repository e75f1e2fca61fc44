use std::time::Duration;

use dioxus::prelude::*;

use crate::util::generate_id;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(6);
const TOAST_LIMIT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✅",
            ToastKind::Error => "⛔",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub title: Option<String>,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            title: None,
            text: text.into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

pub fn push_toast(toasts: Signal<Vec<ToastMessage>>, kind: ToastKind, message: impl Into<String>) {
    push_message(toasts, ToastMessage::new(kind, message));
}

/// Error with a heading, used where the user has to correct something.
pub fn push_alert(
    toasts: Signal<Vec<ToastMessage>>,
    title: impl Into<String>,
    message: impl Into<String>,
) {
    push_message(
        toasts,
        ToastMessage::new(ToastKind::Error, message).with_title(title),
    );
}

fn push_message(mut toasts: Signal<Vec<ToastMessage>>, message: ToastMessage) {
    toasts.with_mut(|entries| {
        if entries.len() >= TOAST_LIMIT {
            entries.remove(0);
        }
        entries.push(message);
    });
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let messages = toasts();

    if messages.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        ul {
            class: "toast-stack",
            for message in messages {
                ToastCard { message, toasts }
            }
        }
    }
}

#[component]
fn ToastCard(message: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let toast_id = message.id.clone();
    let _auto_dismiss = use_future(move || {
        let mut toasts = toasts;
        let id = toast_id.clone();
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    let dismiss_id = message.id.clone();
    let mut toasts = toasts;
    rsx! {
        li {
            class: message.kind.class(),
            span { "{message.kind.icon()}" }
            div {
                if let Some(title) = message.title.clone() {
                    p { class: "toast-title", "{title}" }
                }
                p { "{message.text}" }
            }
            button {
                class: "toast-dismiss",
                onclick: move |_| {
                    let target = dismiss_id.clone();
                    toasts.with_mut(|items| items.retain(|toast| toast.id != target));
                },
                "Dismiss"
            }
        }
    }
}
