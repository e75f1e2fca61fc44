use std::sync::OnceLock;

use rust_embed::RustEmbed;
use tracing::error;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/main.css` as a static string.
pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| load_text("main.css")).as_str()
}

fn load_text(path: &str) -> String {
    let Some(asset) = EmbeddedAssets::get(path) else {
        error!("embedded asset {path} is missing");
        return String::new();
    };
    String::from_utf8(asset.data.into_owned()).unwrap_or_else(|_| {
        error!("embedded asset {path} is not valid UTF-8");
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_is_embedded() {
        assert!(main_css().contains(".card"));
    }
}
