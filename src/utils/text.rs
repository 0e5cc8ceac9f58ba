//! Share text processing: markup stripping, abbreviation under the
//! character budget, count formatting.

/// Strip tags from `text` and decode the common entities, approximating the
/// text a browser would render for the markup.
pub fn strip_markup(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut in_tag = false;
    for ch in text.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => plain.push(c),
            _ => {}
        }
    }
    decode_entities(&plain)
}

// `&amp;` must decode last so it cannot fabricate new entities.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

/// Abbreviate `text` to at most `max_len` characters.
///
/// Text within the budget is returned unchanged (and unencoded). Longer
/// text is cut at the last space before position `max_len - 1`,
/// percent-encoded and terminated with a horizontal ellipsis. When the
/// first word alone exceeds the budget there is no space to cut at; the
/// text is then hard-truncated at `max_len - 1` characters.
pub fn abbreviate(text: &str, max_len: usize) -> String {
    let plain = strip_markup(text);
    if plain.chars().count() <= max_len {
        return text.to_string();
    }

    let head: String = plain.chars().take(max_len.saturating_sub(1)).collect();
    let truncated = match head.rfind(' ') {
        Some(cut) => &head[..cut],
        None => head.as_str(),
    };
    format!("{}\u{2026}", urlencoding::encode(truncated))
}

/// Badge label for a share count: thousands collapse to `"<n>k"`.
pub fn format_count(value: u64) -> String {
    if value >= 1000 {
        format!("{}k", ((value as f64) / 1000.0).round() as u64)
    } else {
        value.to_string()
    }
}
