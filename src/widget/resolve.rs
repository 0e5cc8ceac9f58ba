//! Share URL and share text derivation for the current page.

use crate::constants::SHARE_TEXT_BUDGET;
use crate::dom::Document;
use crate::models::{Options, UrlSource};
use crate::utils::text::abbreviate;

/// The configured share URL: a literal as-is, a resolver invoked against
/// the page on every call.
pub fn resolve_url(options: &Options, document: &Document) -> String {
    match &options.url {
        UrlSource::Literal(url) => url.clone(),
        UrlSource::Resolver(resolver) => resolver(document),
    }
}

/// The built-in share URL algorithm: prefer the declared canonical link,
/// then the `og:url` meta tag, then the page address itself. Schemeless
/// canonical values are completed with the page's scheme and host.
pub fn default_page_url(document: &Document) -> String {
    let canonical = document
        .canonical_link()
        .unwrap_or_else(|| document.meta("og:url"));

    if canonical.is_empty() {
        return document.href().to_string();
    }
    if canonical.contains("http") {
        canonical.to_string()
    } else {
        format!("{}{}", document.location().origin(), canonical)
    }
}

/// The percent-encoded share text, abbreviated to the character budget.
///
/// A configured share text wins. Otherwise the text is built from the
/// `DC.title` and `DC.creator` meta tags when both are present, falling
/// back to the page title.
pub fn resolve_share_text(options: &Options, document: &Document) -> String {
    if !options.share_text.is_empty() {
        return urlencoding::encode(&abbreviate(&options.share_text, SHARE_TEXT_BUDGET))
            .into_owned();
    }

    let title = document.meta("DC.title");
    let creator = document.meta("DC.creator");
    let title = if !title.is_empty() && !creator.is_empty() {
        format!("{} - {}", title, creator)
    } else {
        document.title().to_string()
    };

    urlencoding::encode(&abbreviate(&title, SHARE_TEXT_BUDGET)).into_owned()
}
