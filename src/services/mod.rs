/// Service catalog - the closed set of share targets
///
/// Each id carries its network's fixed data (labels, icon, popup policy)
/// and knows how to derive the outbound share URL from the widget's current
/// page state. Resolution of configured names against the catalog yields a
/// widget's active service list.
use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::models::{Localized, Service};

/// The share targets this widget knows about. The set is closed: activating
/// a service means naming one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceId {
    Facebook,
    GooglePlus,
    Twitter,
    Whatsapp,
    Mail,
    Info,
}

/// Everything a share URL can embed, resolved by the owning widget.
pub struct ShareContext<'a> {
    /// Canonical share URL of the page.
    pub url: &'a str,
    /// Referrer-track suffix, empty when unset.
    pub referrer_track: &'a str,
    /// Share text, already percent-encoded.
    pub share_text: &'a str,
    pub twitter_via: Option<&'a str>,
    pub info_url: &'a str,
}

impl ShareContext<'_> {
    /// Page URL with the referrer-track suffix, percent-encoded for
    /// embedding as a query value.
    fn encoded_url(&self) -> String {
        urlencoding::encode(&format!("{}{}", self.url, self.referrer_track)).into_owned()
    }
}

impl ServiceId {
    pub const ALL: [ServiceId; 6] = [
        ServiceId::Facebook,
        ServiceId::GooglePlus,
        ServiceId::Twitter,
        ServiceId::Whatsapp,
        ServiceId::Mail,
        ServiceId::Info,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ServiceId::Facebook => "facebook",
            ServiceId::GooglePlus => "googleplus",
            ServiceId::Twitter => "twitter",
            ServiceId::Whatsapp => "whatsapp",
            ServiceId::Mail => "mail",
            ServiceId::Info => "info",
        }
    }

    pub fn fa_name(self) -> Option<&'static str> {
        match self {
            ServiceId::Facebook => Some("fa-facebook"),
            ServiceId::GooglePlus => Some("fa-google-plus"),
            ServiceId::Twitter => Some("fa-twitter"),
            ServiceId::Whatsapp => Some("fa-whatsapp"),
            ServiceId::Mail => Some("fa-envelope"),
            ServiceId::Info => Some("fa-info"),
        }
    }

    /// Popup services open in a sized secondary window, the rest in a tab.
    pub fn popup(self) -> bool {
        matches!(
            self,
            ServiceId::Facebook | ServiceId::GooglePlus | ServiceId::Twitter
        )
    }

    /// Whether the share URL embeds the page URL/text. The info button is
    /// the only fixed-URL service.
    pub fn is_url_dependent(self) -> bool {
        self != ServiceId::Info
    }

    fn title(self) -> Localized {
        match self {
            ServiceId::Facebook => Localized::ByLang(&[
                ("de", "Bei Facebook teilen"),
                ("en", "Share on Facebook"),
            ]),
            ServiceId::GooglePlus => Localized::ByLang(&[
                ("de", "Bei Google+ teilen"),
                ("en", "Share on Google+"),
            ]),
            ServiceId::Twitter => Localized::ByLang(&[
                ("de", "Bei Twitter teilen"),
                ("en", "Share on Twitter"),
            ]),
            ServiceId::Whatsapp => Localized::ByLang(&[
                ("de", "Bei WhatsApp teilen"),
                ("en", "Share on WhatsApp"),
            ]),
            ServiceId::Mail => Localized::ByLang(&[
                ("de", "Per E-Mail versenden"),
                ("en", "Send by email"),
            ]),
            ServiceId::Info => Localized::ByLang(&[
                ("de", "Informationen zu diesen Buttons"),
                ("en", "About these buttons"),
            ]),
        }
    }

    fn button_text(self) -> Localized {
        match self {
            ServiceId::Facebook | ServiceId::Whatsapp => {
                Localized::ByLang(&[("de", "teilen"), ("en", "share")])
            }
            ServiceId::GooglePlus => Localized::Fixed("+1"),
            ServiceId::Twitter => Localized::ByLang(&[("de", "twittern"), ("en", "tweet")]),
            ServiceId::Mail => Localized::ByLang(&[("de", "E-Mail"), ("en", "mail")]),
            ServiceId::Info => Localized::Fixed("Info"),
        }
    }

    /// Derive the outbound share URL for the current page state.
    pub fn share_url(self, ctx: &ShareContext) -> String {
        match self {
            ServiceId::Facebook => format!(
                "https://www.facebook.com/sharer/sharer.php?u={}",
                ctx.encoded_url()
            ),
            ServiceId::GooglePlus => {
                format!("https://plus.google.com/share?url={}", ctx.encoded_url())
            }
            ServiceId::Twitter => {
                let mut url = format!(
                    "https://twitter.com/intent/tweet?text={}&url={}",
                    ctx.share_text,
                    ctx.encoded_url()
                );
                if let Some(via) = ctx.twitter_via {
                    url.push_str("&via=");
                    url.push_str(&urlencoding::encode(via));
                }
                url
            }
            ServiceId::Whatsapp => format!(
                "whatsapp://send?text={}%20{}",
                ctx.share_text,
                ctx.encoded_url()
            ),
            ServiceId::Mail => format!(
                "mailto:?subject={}&body={}",
                ctx.share_text,
                ctx.encoded_url()
            ),
            ServiceId::Info => ctx.info_url.to_string(),
        }
    }

    /// Build the concrete service record for the given page state.
    pub fn build(self, ctx: &ShareContext) -> Service {
        Service {
            id: self,
            share_url: self.share_url(ctx),
            title: self.title(),
            share_text: self.button_text(),
            fa_name: self.fa_name(),
            popup: self.popup(),
        }
    }
}

static BY_NAME: Lazy<HashMap<&'static str, ServiceId>> =
    Lazy::new(|| ServiceId::ALL.iter().map(|id| (id.name(), *id)).collect());

/// Look a service up by its configured name.
pub fn lookup(name: &str) -> Option<ServiceId> {
    BY_NAME.get(name).copied()
}

/// Resolve configured names against the catalog, preserving order. Unknown
/// and repeated names yield no entry.
pub fn resolve_services(names: &[String], ctx: &ShareContext) -> Vec<Service> {
    let mut seen: Vec<ServiceId> = Vec::new();
    let mut active = Vec::new();
    for name in names {
        let Some(id) = lookup(name) else {
            log::debug!("[Services] Ignoring unknown service name {:?}", name);
            continue;
        };
        if seen.contains(&id) {
            log::debug!("[Services] Ignoring duplicate service name {:?}", name);
            continue;
        }
        seen.push(id);
        active.push(id.build(ctx));
    }
    active
}
