//! Renders a sample share widget to stdout. Pass a count backend URL as
//! the first argument to exercise the count fetch.

use sharebar::{Document, Element, OptionsOverride, ShareWidget};

#[tokio::main]
async fn main() {
    // Set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("[Demo] Rendering sample share widget");

    let document = Document::new("https://example.com/articles/42?session=1")
        .with_canonical("https://example.com/articles/42")
        .with_meta("DC.title", "Forty-two ways to share a page")
        .with_meta("DC.creator", "A. Author")
        .with_title("Forty-two ways to share a page");

    let mut overrides = OptionsOverride {
        lang: Some("en".to_string()),
        twitter_via: Some("nobus".to_string()),
        services: Some(
            ["facebook", "twitter", "whatsapp", "mail", "info"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        ),
        ..Default::default()
    };

    if let Some(backend_url) = std::env::args().nth(1) {
        log::info!("[Demo] Using count backend: {}", backend_url);
        overrides.backend_url = Some(backend_url);
    }

    match ShareWidget::mount(document, Element::new("div"), overrides).await {
        Some(widget) => println!("{}", widget.element().to_html()),
        None => log::error!("[Demo] Mount element was already bound"),
    }
}
