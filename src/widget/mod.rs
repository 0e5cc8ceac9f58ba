//! The share widget: resolves configuration, composes the active service
//! list, renders into the host element and serves the mutation API.

pub mod render;
pub mod resolve;

use std::collections::HashMap;

use crate::constants::{BOUND_ATTR, COUNT_CLASS, POPUP_HEIGHT, POPUP_WIDTH, SERVICE_ATTR};
use crate::dom::{Document, Element};
use crate::models::{Options, OptionsOverride, Service, Theme, UrlSource};
use crate::services::{self, ShareContext};
use crate::utils::navigation::Navigator;
use crate::utils::text::format_count;

/// One widget per mount element. Owns the resolved options, the active
/// service list and the host subtree it renders into.
pub struct ShareWidget {
    document: Document,
    element: Element,
    options: Options,
    services: Vec<Service>,
}

impl ShareWidget {
    /// Bind a widget to a mount element and render the buttons.
    ///
    /// Binding is idempotent: an element already carrying the bound marker
    /// is left alone and `None` is returned.
    pub fn bind(
        document: Document,
        mut element: Element,
        overrides: OptionsOverride,
    ) -> Option<ShareWidget> {
        if element.attr(BOUND_ATTR).is_some() {
            log::debug!("[Widget] Mount element already bound, skipping");
            return None;
        }
        element.set_attr(BOUND_ATTR, "true");

        let options = Options::resolve(overrides, &element);
        let mut widget = ShareWidget {
            document,
            element,
            options,
            services: Vec::new(),
        };
        widget.services = widget.build_services();

        log::info!(
            "[Widget] Binding {} services, theme {}",
            widget.services.len(),
            widget.options.theme.as_str()
        );

        match widget.options.theme {
            Theme::Custom => render::wire_custom_buttons(
                &mut widget.element,
                &widget.services,
                &widget.options,
            ),
            _ => render::append_button_list(&mut widget.element, &widget.services, &widget.options),
        }

        Some(widget)
    }

    /// [`ShareWidget::bind`] plus the bind-time count fetch: when a backend
    /// is configured the counts are fetched and applied before returning.
    /// A failed fetch only logs; the buttons stay unannotated.
    pub async fn mount(
        document: Document,
        element: Element,
        overrides: OptionsOverride,
    ) -> Option<ShareWidget> {
        let mut widget = Self::bind(document, element, overrides)?;
        if let Err(e) = widget.update_counts().await {
            log::warn!("[Widget] Share count fetch failed: {}", e);
        }
        Some(widget)
    }

    fn build_services(&self) -> Vec<Service> {
        let url = resolve::resolve_url(&self.options, &self.document);
        let share_text = resolve::resolve_share_text(&self.options, &self.document);
        let ctx = ShareContext {
            url: &url,
            referrer_track: self.options.referrer_track.as_deref().unwrap_or(""),
            share_text: &share_text,
            twitter_via: self.options.twitter_via.as_deref(),
            info_url: &self.options.info_url,
        };
        services::resolve_services(&self.options.services, &ctx)
    }

    /// The current share URL, re-resolved on every call.
    pub fn get_url(&self) -> String {
        resolve::resolve_url(&self.options, &self.document)
    }

    /// The current percent-encoded share text.
    pub fn share_text(&self) -> String {
        resolve::resolve_share_text(&self.options, &self.document)
    }

    /// Target of the info button.
    pub fn info_url(&self) -> &str {
        &self.options.info_url
    }

    /// Referrer-track suffix, empty when unset.
    pub fn referrer_track(&self) -> &str {
        self.options.referrer_track.as_deref().unwrap_or("")
    }

    /// Replace the share URL (a literal displaces any resolver) and rewrite
    /// every URL-dependent service's share URL and rendered `href` in
    /// place. Passing `None` re-resolves the existing source instead.
    pub fn set_url(&mut self, url: Option<&str>) -> &mut ShareWidget {
        if let Some(url) = url {
            self.options.url = UrlSource::Literal(url.to_string());
        }

        let url = resolve::resolve_url(&self.options, &self.document);
        let share_text = resolve::resolve_share_text(&self.options, &self.document);
        let ctx = ShareContext {
            url: &url,
            referrer_track: self.options.referrer_track.as_deref().unwrap_or(""),
            share_text: &share_text,
            twitter_via: self.options.twitter_via.as_deref(),
            info_url: &self.options.info_url,
        };

        for service in &mut self.services {
            if !service.is_url_dependent() {
                continue;
            }
            service.share_url = service.id.share_url(&ctx);
        }

        for service in &self.services {
            if !service.is_url_dependent() {
                continue;
            }
            let name = service.name();
            if let Some(anchor) = self
                .element
                .find_mut(&|el| el.tag() == "a" && el.attr(SERVICE_ATTR) == Some(name))
            {
                anchor.set_attr("href", &service.share_url);
            }
        }

        self
    }

    /// Replace the share text, then re-run [`ShareWidget::set_url`] with
    /// the current resolved URL: several networks embed the text in their
    /// share URL.
    pub fn set_share_text(&mut self, text: &str) -> &mut ShareWidget {
        self.options.share_text = text.to_string();
        let current = self.get_url();
        self.set_url(Some(&current))
    }

    /// Fetch the share counts for the current URL. Without a configured
    /// backend this resolves to an empty map and issues no request.
    pub async fn get_shares(&self) -> Result<HashMap<String, u64>, Box<dyn std::error::Error>> {
        let Some(backend_url) = self.options.backend_url.as_deref() else {
            log::debug!("[Widget] No backend URL configured, skipping count fetch");
            return Ok(HashMap::new());
        };
        crate::api::counts::fetch_counts(backend_url, &self.get_url()).await
    }

    /// Fetch and apply the share counts in one step.
    pub async fn update_counts(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        if self.options.backend_url.is_none() {
            return Ok(());
        }
        let counts = self.get_shares().await?;
        self.apply_counts(&counts);
        Ok(())
    }

    /// Append a count badge into each matching rendered button. Keys with
    /// no rendered button are ignored, so counts arriving after buttons
    /// were removed are harmless.
    pub fn apply_counts(&mut self, counts: &HashMap<String, u64>) {
        for (name, value) in counts {
            let Some(container) = self.element.find_mut(&|el| el.has_class(name)) else {
                log::debug!("[Widget] No rendered button for count key {:?}", name);
                continue;
            };
            let Some(anchor) = container.find_mut(&|el| el.tag() == "a") else {
                continue;
            };
            let mut badge = Element::new("span");
            badge.add_class(COUNT_CLASS);
            badge.append_text(&format_count(*value));
            anchor.append_element(badge);
        }
    }

    /// Activate the rendered link for `name`: popup-marked links suppress
    /// normal navigation and open one sized secondary window, the rest open
    /// a tab. Returns `false` when no rendered link matches.
    pub fn activate(&self, name: &str, navigator: &mut dyn Navigator) -> bool {
        let Some(anchor) = self
            .element
            .find(&|el| el.tag() == "a" && el.attr(SERVICE_ATTR) == Some(name))
        else {
            log::debug!("[Widget] No rendered anchor for service {:?}", name);
            return false;
        };

        let href = anchor.attr("href").unwrap_or("");
        let result = if anchor.attr("rel") == Some("popup") {
            let window_name = anchor.attr("title").unwrap_or("");
            navigator.open_popup(href, window_name, POPUP_WIDTH, POPUP_HEIGHT)
        } else {
            navigator.open_tab(href)
        };

        if let Err(e) = result {
            log::error!("[Widget] Failed to open share target {:?}: {}", name, e);
        }
        true
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    /// Hand the (rendered) host subtree back to the host.
    pub fn into_element(self) -> Element {
        self.element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> Document {
        Document::new("https://example.com/articles/42")
            .with_canonical("https://example.com/articles/42")
            .with_title("An article")
    }

    fn overrides(services: &[&str]) -> OptionsOverride {
        OptionsOverride {
            lang: Some("en".to_string()),
            services: Some(services.iter().map(|s| s.to_string()).collect()),
            ..Default::default()
        }
    }

    fn bind(services: &[&str]) -> ShareWidget {
        ShareWidget::bind(sample_document(), Element::new("div"), overrides(services)).unwrap()
    }

    #[test]
    fn test_bind_is_idempotent() {
        let widget = bind(&["twitter"]);
        let element = widget.into_element();
        assert!(ShareWidget::bind(sample_document(), element, OptionsOverride::default()).is_none());
    }

    #[test]
    fn test_generated_list_order_matches_options() {
        let widget = bind(&["twitter", "facebook"]);
        let anchors = widget
            .element()
            .find_all(&|el| el.tag() == "a" && el.attr(SERVICE_ATTR).is_some());
        let names: Vec<_> = anchors
            .iter()
            .filter_map(|el| el.attr(SERVICE_ATTR))
            .collect();
        assert_eq!(names, vec!["twitter", "facebook"]);
    }

    #[test]
    fn test_generated_anchor_carries_contract_attributes() {
        let widget = bind(&["twitter"]);
        let anchor = widget
            .element()
            .find(&|el| el.attr(SERVICE_ATTR) == Some("twitter"))
            .unwrap();
        assert_eq!(anchor.attr("rel"), Some("popup"));
        assert_eq!(anchor.attr("title"), Some("Share on Twitter"));
        assert!(anchor.attr("href").unwrap().contains("twitter.com/intent/tweet"));

        let item = widget
            .element()
            .find(&|el| el.tag() == "li" && el.has_class("twitter"))
            .unwrap();
        assert!(item.has_class("sharebar-button"));
    }

    #[test]
    fn test_non_popup_service_targets_blank() {
        let widget = bind(&["mail"]);
        let anchor = widget
            .element()
            .find(&|el| el.attr(SERVICE_ATTR) == Some("mail"))
            .unwrap();
        assert_eq!(anchor.attr("target"), Some("_blank"));
        assert_eq!(anchor.attr("rel"), None);
    }

    #[test]
    fn test_set_url_rewrites_dependent_hrefs_only() {
        let mut widget = bind(&["twitter", "info"]);
        let info_href_before = widget
            .element()
            .find(&|el| el.attr(SERVICE_ATTR) == Some("info"))
            .unwrap()
            .attr("href")
            .unwrap()
            .to_string();

        widget.set_url(Some("https://example.com/x"));

        let twitter = widget
            .element()
            .find(&|el| el.attr(SERVICE_ATTR) == Some("twitter"))
            .unwrap();
        assert!(twitter
            .attr("href")
            .unwrap()
            .contains(&urlencoding::encode("https://example.com/x").into_owned()));

        let info = widget
            .element()
            .find(&|el| el.attr(SERVICE_ATTR) == Some("info"))
            .unwrap();
        assert_eq!(info.attr("href"), Some(info_href_before.as_str()));
    }

    #[test]
    fn test_set_share_text_propagates_into_share_urls() {
        let mut widget = bind(&["twitter"]);
        widget.set_share_text("fresh words");

        let twitter = widget
            .element()
            .find(&|el| el.attr(SERVICE_ATTR) == Some("twitter"))
            .unwrap();
        assert!(twitter.attr("href").unwrap().contains("fresh%20words"));
        assert_eq!(widget.share_text(), "fresh%20words");
    }

    #[test]
    fn test_apply_counts_appends_badges_and_ignores_unknown() {
        let mut widget = bind(&["twitter", "facebook"]);
        let counts =
            HashMap::from([("twitter".to_string(), 1500), ("myspace".to_string(), 7)]);
        widget.apply_counts(&counts);

        let badge = widget
            .element()
            .find(&|el| el.has_class("share_count"))
            .unwrap();
        assert_eq!(badge.text(), "2k");

        let facebook = widget
            .element()
            .find(&|el| el.tag() == "li" && el.has_class("facebook"))
            .unwrap();
        assert!(facebook.find(&|el| el.has_class("share_count")).is_none());
    }

    #[test]
    fn test_custom_theme_wires_existing_anchors_only() {
        let mut host = Element::new("div");
        host.set_attr("data-theme", "custom");
        let mut twitter = Element::new("a");
        twitter.set_attr("data-share-service", "twitter");
        let mut unrelated = Element::new("a");
        unrelated.set_attr("href", "https://elsewhere.example/");
        host.append_element(twitter);
        host.append_element(unrelated);

        let widget = ShareWidget::bind(sample_document(), host, overrides(&["facebook"])).unwrap();

        // the caller's service list is replaced by the markup's declaration
        let names: Vec<_> = widget.services().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["twitter"]);

        let anchor = widget
            .element()
            .find(&|el| el.attr(SERVICE_ATTR) == Some("twitter"))
            .unwrap();
        assert_eq!(anchor.attr("rel"), Some("popup"));
        assert!(anchor.attr("href").unwrap().contains("twitter.com"));

        // no list is generated, the unrelated anchor stays untouched
        assert!(widget.element().find(&|el| el.tag() == "ul").is_none());
        let untouched = widget
            .element()
            .find(&|el| el.attr("href") == Some("https://elsewhere.example/"))
            .unwrap();
        assert_eq!(untouched.attr("rel"), None);
        assert_eq!(untouched.attr("target"), None);
    }

    #[test]
    fn test_unknown_configured_service_is_dropped() {
        let widget = bind(&["twitter", "myspace"]);
        assert_eq!(widget.services().len(), 1);
    }

    struct RecordingNavigator {
        popups: Vec<(String, String, u32, u32)>,
        tabs: Vec<String>,
    }

    impl RecordingNavigator {
        fn new() -> RecordingNavigator {
            RecordingNavigator {
                popups: Vec::new(),
                tabs: Vec::new(),
            }
        }
    }

    impl Navigator for RecordingNavigator {
        fn open_popup(
            &mut self,
            url: &str,
            window_name: &str,
            width: u32,
            height: u32,
        ) -> Result<(), String> {
            self.popups
                .push((url.to_string(), window_name.to_string(), width, height));
            Ok(())
        }

        fn open_tab(&mut self, url: &str) -> Result<(), String> {
            self.tabs.push(url.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_activate_popup_opens_one_sized_window() {
        let widget = bind(&["twitter"]);
        let mut navigator = RecordingNavigator::new();

        assert!(widget.activate("twitter", &mut navigator));

        assert_eq!(navigator.popups.len(), 1);
        assert!(navigator.tabs.is_empty());
        let (url, window_name, width, height) = &navigator.popups[0];
        assert!(url.contains("twitter.com/intent/tweet"));
        assert_eq!(window_name, "Share on Twitter");
        assert_eq!((*width, *height), (600, 460));
    }

    #[test]
    fn test_activate_non_popup_opens_tab() {
        let widget = bind(&["mail"]);
        let mut navigator = RecordingNavigator::new();

        assert!(widget.activate("mail", &mut navigator));
        assert_eq!(navigator.tabs.len(), 1);
        assert!(navigator.popups.is_empty());
    }

    #[test]
    fn test_activate_unrendered_service_is_noop() {
        let widget = bind(&["twitter"]);
        let mut navigator = RecordingNavigator::new();

        assert!(!widget.activate("facebook", &mut navigator));
        assert!(navigator.popups.is_empty());
        assert!(navigator.tabs.is_empty());
    }

    #[tokio::test]
    async fn test_get_shares_without_backend_skips_fetch() {
        let widget = bind(&["twitter"]);
        let counts = widget.get_shares().await.unwrap();
        assert!(counts.is_empty());
    }
}
