use crate::services::ServiceId;

/// A string that is either fixed or varies by language code.
///
/// Governs both the hover title and the button label of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Localized {
    Fixed(&'static str),
    ByLang(&'static [(&'static str, &'static str)]),
}

impl Localized {
    /// The entry for `lang`, the fixed string, or `None` when the mapping
    /// has no entry for that language.
    pub fn get(&self, lang: &str) -> Option<&'static str> {
        match self {
            Localized::Fixed(text) => Some(text),
            Localized::ByLang(entries) => entries
                .iter()
                .find(|(entry_lang, _)| *entry_lang == lang)
                .map(|(_, text)| *text),
        }
    }
}

/// One social network's sharing capability, built from the catalog for the
/// owning widget's current page state.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: ServiceId,
    /// Fully-built outbound share URL for the current page state.
    pub share_url: String,
    pub title: Localized,
    pub share_text: Localized,
    /// Icon class, when the service carries one.
    pub fa_name: Option<&'static str>,
    /// `true` opens a sized popup window, `false` a new tab.
    pub popup: bool,
}

impl Service {
    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    /// Whether the share URL embeds the page URL/text and must be
    /// recomputed when either changes.
    pub fn is_url_dependent(&self) -> bool {
        self.id.is_url_dependent()
    }
}
