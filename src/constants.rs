//! Widget constants and built-in configuration defaults

// === Share text ===
// Max character count left for the share text after the target network's
// automatic URL shortening rewrites any embedded link.
pub const SHARE_TEXT_BUDGET: usize = 120;

// === Popup window ===
pub const POPUP_WIDTH: u32 = 600;
pub const POPUP_HEIGHT: u32 = 460;

// === Rendered markup ===
pub const SERVICE_ATTR: &str = "data-share-service";
pub const BOUND_ATTR: &str = "data-share-bound";
pub const BUTTON_CLASS: &str = "sharebar-button";
pub const COUNT_CLASS: &str = "share_count";

// === Configuration defaults ===
pub const DEFAULT_INFO_URL: &str = "http://ct.de/-2467514";
pub const DEFAULT_LANG: &str = "de";
pub const DEFAULT_SERVICES: [&str; 4] = ["facebook", "twitter", "googleplus", "info"];
