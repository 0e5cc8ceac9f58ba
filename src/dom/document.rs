//! Page metadata record supplied by the host.

use std::collections::BTreeMap;

/// The page address, split so schemeless canonical values can be completed.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    href: String,
    scheme: String,
    host: String,
}

impl Location {
    /// Parse a full page address. Scheme and host fall back to empty when
    /// the address has no `scheme://` prefix.
    pub fn parse(href: &str) -> Location {
        let (scheme, host) = match href.split_once("://") {
            Some((scheme, rest)) => {
                let host = rest
                    .split(|c| c == '/' || c == '?' || c == '#')
                    .next()
                    .unwrap_or("");
                (scheme.to_string(), host.to_string())
            }
            None => (String::new(), String::new()),
        };
        Location {
            href: href.to_string(),
            scheme,
            host,
        }
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// `scheme://host`, the prefix applied to schemeless canonical values.
    pub fn origin(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }
}

/// Everything the widget reads from the hosting page: the current address,
/// the declared canonical link, named meta tags and the page title.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    location: Location,
    canonical: Option<String>,
    metas: BTreeMap<String, String>,
    title: String,
}

impl Document {
    pub fn new(href: &str) -> Document {
        Document {
            location: Location::parse(href),
            canonical: None,
            metas: BTreeMap::new(),
            title: String::new(),
        }
    }

    /// Declare the page's `<link rel="canonical">` target.
    pub fn with_canonical(mut self, href: &str) -> Document {
        self.canonical = Some(href.to_string());
        self
    }

    /// Declare a named `<meta>` tag (name or property keyed).
    pub fn with_meta(mut self, name: &str, content: &str) -> Document {
        self.metas.insert(name.to_string(), content.to_string());
        self
    }

    /// Declare the page `<title>` text.
    pub fn with_title(mut self, title: &str) -> Document {
        self.title = title.to_string();
        self
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn href(&self) -> &str {
        self.location.href()
    }

    pub fn canonical_link(&self) -> Option<&str> {
        self.canonical.as_deref()
    }

    /// Content of the named meta tag, or `""` when absent.
    pub fn meta(&self, name: &str) -> &str {
        self.metas.get(name).map_or("", String::as_str)
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_parses_scheme_and_host() {
        let location = Location::parse("https://example.com/articles/42?ref=1");
        assert_eq!(location.scheme(), "https");
        assert_eq!(location.host(), "example.com");
        assert_eq!(location.origin(), "https://example.com");
        assert_eq!(location.href(), "https://example.com/articles/42?ref=1");
    }

    #[test]
    fn test_location_without_scheme() {
        let location = Location::parse("/articles/42");
        assert_eq!(location.scheme(), "");
        assert_eq!(location.host(), "");
    }

    #[test]
    fn test_meta_defaults_to_empty() {
        let document = Document::new("https://example.com/").with_meta("DC.title", "A title");
        assert_eq!(document.meta("DC.title"), "A title");
        assert_eq!(document.meta("DC.creator"), "");
    }
}
