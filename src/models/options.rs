//! Widget configuration: defaults, caller overrides and element data merged
//! into one resolved [`Options`] record per widget instance.

use serde::Deserialize;

use crate::constants::{DEFAULT_INFO_URL, DEFAULT_LANG, DEFAULT_SERVICES, SERVICE_ATTR};
use crate::dom::{Document, Element};

/// Rendering mode selector. `Custom` hands markup creation to the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Color,
    Grey,
    White,
    Custom,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "color" => Some(Theme::Color),
            "grey" => Some(Theme::Grey),
            "white" => Some(Theme::White),
            "custom" => Some(Theme::Custom),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Color => "color",
            Theme::Grey => "grey",
            Theme::White => "white",
            Theme::Custom => "custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn parse(value: &str) -> Option<Orientation> {
        match value {
            "horizontal" => Some(Orientation::Horizontal),
            "vertical" => Some(Orientation::Vertical),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

/// Where the share URL comes from: a fixed literal, or a resolver invoked
/// against the page on every use (never cached).
pub enum UrlSource {
    Literal(String),
    Resolver(Box<dyn Fn(&Document) -> String + Send + Sync>),
}

impl std::fmt::Debug for UrlSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UrlSource::Literal(url) => f.debug_tuple("Literal").field(url).finish(),
            UrlSource::Resolver(_) => f.write_str("Resolver(..)"),
        }
    }
}

/// Resolved configuration, one per widget instance.
#[derive(Debug)]
pub struct Options {
    pub theme: Theme,
    /// Count backend. `None` disables count fetching.
    pub backend_url: Option<String>,
    /// Target of the `info` button.
    pub info_url: String,
    pub lang: String,
    pub orientation: Orientation,
    /// Suffix appended to the page URL inside the share URLs.
    pub referrer_track: Option<String>,
    /// Service names to activate, in render order.
    pub services: Vec<String>,
    pub share_text: String,
    /// Handle appended as `via` to the twitter share URL.
    pub twitter_via: Option<String>,
    pub url: UrlSource,
}

impl Options {
    /// Built-in defaults, the lowest-precedence merge layer.
    pub fn defaults() -> Options {
        Options {
            theme: Theme::Color,
            backend_url: None,
            info_url: DEFAULT_INFO_URL.to_string(),
            lang: DEFAULT_LANG.to_string(),
            orientation: Orientation::Horizontal,
            referrer_track: None,
            services: DEFAULT_SERVICES.iter().map(|s| s.to_string()).collect(),
            share_text: String::new(),
            twitter_via: None,
            url: UrlSource::Resolver(Box::new(crate::widget::resolve::default_page_url)),
        }
    }

    /// Merge defaults, caller overrides and the mount element's `data-*`
    /// attributes, later source winning key-by-key.
    ///
    /// With the custom theme the service list is instead collected from the
    /// host markup's declared service names, replacing whatever the merge
    /// produced.
    pub fn resolve(overrides: OptionsOverride, element: &Element) -> Options {
        let mut options = Options::defaults();
        options.apply(overrides);
        options.apply(OptionsOverride::from_element_data(element));

        if options.theme == Theme::Custom {
            options.services = element
                .find_all(&|el| el.attr(SERVICE_ATTR).is_some())
                .iter()
                .filter_map(|el| el.attr(SERVICE_ATTR))
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();
            log::debug!(
                "[Options] Custom theme: {} services declared by host markup",
                options.services.len()
            );
        }

        options
    }

    fn apply(&mut self, overrides: OptionsOverride) {
        let OptionsOverride {
            theme,
            backend_url,
            info_url,
            lang,
            orientation,
            referrer_track,
            services,
            share_text,
            twitter_via,
            url,
            url_resolver,
        } = overrides;

        if let Some(value) = theme {
            self.theme = value;
        }
        if let Some(value) = backend_url {
            self.backend_url = Some(value);
        }
        if let Some(value) = info_url {
            self.info_url = value;
        }
        if let Some(value) = lang {
            self.lang = value;
        }
        if let Some(value) = orientation {
            self.orientation = value;
        }
        if let Some(value) = referrer_track {
            self.referrer_track = Some(value);
        }
        if let Some(value) = services {
            self.services = value;
        }
        if let Some(value) = share_text {
            self.share_text = value;
        }
        if let Some(value) = twitter_via {
            self.twitter_via = Some(value);
        }
        if let Some(value) = url {
            self.url = UrlSource::Literal(value);
        }
        if let Some(resolver) = url_resolver {
            self.url = UrlSource::Resolver(resolver);
        }
    }
}

/// Caller-supplied configuration, every field optional. Deserializes from
/// JSON with the declarative attribute names (`backendUrl`, `twitterVia`,
/// ...) so hosts can pass config straight through.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionsOverride {
    pub theme: Option<Theme>,
    pub backend_url: Option<String>,
    pub info_url: Option<String>,
    pub lang: Option<String>,
    pub orientation: Option<Orientation>,
    pub referrer_track: Option<String>,
    pub services: Option<Vec<String>>,
    pub share_text: Option<String>,
    pub twitter_via: Option<String>,
    /// Literal share URL. Deferred resolvers go through `url_resolver`.
    pub url: Option<String>,
    /// Programmatic share-URL resolver, invoked against the page on demand.
    #[serde(skip)]
    pub url_resolver: Option<Box<dyn Fn(&Document) -> String + Send + Sync>>,
}

impl OptionsOverride {
    pub fn from_json(json: &str) -> Result<OptionsOverride, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read the recognized `data-*` attributes off the mount element.
    /// Unknown enum values are logged and ignored so the lower-precedence
    /// value stands.
    pub fn from_element_data(element: &Element) -> OptionsOverride {
        let mut data = OptionsOverride::default();

        if let Some(value) = element.attr("data-theme") {
            match Theme::parse(value) {
                Some(theme) => data.theme = Some(theme),
                None => log::warn!("[Options] Ignoring unknown theme {:?} in element data", value),
            }
        }
        if let Some(value) = element.attr("data-orientation") {
            match Orientation::parse(value) {
                Some(orientation) => data.orientation = Some(orientation),
                None => log::warn!(
                    "[Options] Ignoring unknown orientation {:?} in element data",
                    value
                ),
            }
        }
        if let Some(value) = element.attr("data-backend-url") {
            data.backend_url = Some(value.to_string());
        }
        if let Some(value) = element.attr("data-info-url") {
            data.info_url = Some(value.to_string());
        }
        if let Some(value) = element.attr("data-lang") {
            data.lang = Some(value.to_string());
        }
        if let Some(value) = element.attr("data-referrer-track") {
            data.referrer_track = Some(value.to_string());
        }
        if let Some(value) = element.attr("data-services") {
            data.services = Some(
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect(),
            );
        }
        if let Some(value) = element.attr("data-share-text") {
            data.share_text = Some(value.to_string());
        }
        if let Some(value) = element.attr("data-twitter-via") {
            data.twitter_via = Some(value.to_string());
        }
        if let Some(value) = element.attr("data-url") {
            data.url = Some(value.to_string());
        }

        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::defaults();
        assert_eq!(options.theme, Theme::Color);
        assert_eq!(options.backend_url, None);
        assert_eq!(options.lang, "de");
        assert_eq!(options.orientation, Orientation::Horizontal);
        assert_eq!(
            options.services,
            vec!["facebook", "twitter", "googleplus", "info"]
        );
        assert!(matches!(options.url, UrlSource::Resolver(_)));
    }

    #[test]
    fn test_element_data_overrides_caller_overrides_default() {
        let mut element = Element::new("div");
        element.set_attr("data-lang", "en");

        let overrides = OptionsOverride {
            lang: Some("fr".to_string()),
            theme: Some(Theme::Grey),
            ..Default::default()
        };

        let options = Options::resolve(overrides, &element);
        // element data wins over the caller override
        assert_eq!(options.lang, "en");
        // caller override wins over the default
        assert_eq!(options.theme, Theme::Grey);
        // untouched key keeps the default
        assert_eq!(options.orientation, Orientation::Horizontal);
    }

    #[test]
    fn test_invalid_element_enum_value_is_ignored() {
        let mut element = Element::new("div");
        element.set_attr("data-theme", "rainbow");

        let overrides = OptionsOverride {
            theme: Some(Theme::White),
            ..Default::default()
        };

        let options = Options::resolve(overrides, &element);
        assert_eq!(options.theme, Theme::White);
    }

    #[test]
    fn test_data_services_comma_list() {
        let mut element = Element::new("div");
        element.set_attr("data-services", "twitter, facebook ,,mail");

        let options = Options::resolve(OptionsOverride::default(), &element);
        assert_eq!(options.services, vec!["twitter", "facebook", "mail"]);
    }

    #[test]
    fn test_custom_theme_services_come_from_markup() {
        let mut element = Element::new("div");
        element.set_attr("data-theme", "custom");
        let mut first = Element::new("a");
        first.set_attr("data-share-service", "mail");
        let mut second = Element::new("a");
        second.set_attr("data-share-service", "twitter");
        element.append_element(first);
        element.append_element(second);

        let overrides = OptionsOverride {
            services: Some(vec!["facebook".to_string()]),
            ..Default::default()
        };

        let options = Options::resolve(overrides, &element);
        // markup replaces the caller-supplied list entirely, in tree order
        assert_eq!(options.services, vec!["mail", "twitter"]);
    }

    #[test]
    fn test_data_url_becomes_literal() {
        let mut element = Element::new("div");
        element.set_attr("data-url", "https://example.com/fixed");

        let options = Options::resolve(OptionsOverride::default(), &element);
        assert!(
            matches!(options.url, UrlSource::Literal(ref url) if url == "https://example.com/fixed")
        );
    }

    #[test]
    fn test_override_from_json() {
        let overrides = OptionsOverride::from_json(
            r#"{"theme": "custom", "backendUrl": "https://counts.example", "twitterVia": "nobus"}"#,
        )
        .unwrap();
        assert_eq!(overrides.theme, Some(Theme::Custom));
        assert_eq!(
            overrides.backend_url.as_deref(),
            Some("https://counts.example")
        );
        assert_eq!(overrides.twitter_via.as_deref(), Some("nobus"));
        assert!(overrides.lang.is_none());
    }
}
