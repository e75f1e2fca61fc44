//! Class helpers so pages stay consistent with `assets/main.css`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonKind {
    Primary,
    Secondary,
    Link,
}

pub fn button(kind: ButtonKind) -> &'static str {
    match kind {
        ButtonKind::Primary => "btn btn-primary",
        ButtonKind::Secondary => "btn btn-secondary",
        ButtonKind::Link => "btn btn-link",
    }
}
