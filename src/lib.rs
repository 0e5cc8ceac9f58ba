//! Share button widget engine.
//!
//! Renders a row of "share this page" buttons for a closed set of social
//! networks, builds each network's outbound share URL from the page's
//! canonical address and share text, and optionally annotates the buttons
//! with live share counts fetched from a count backend.
//!
//! Hosts describe their page as a [`Document`], hand the widget a mount
//! [`Element`] and get the rendered subtree back:
//!
//! ```
//! use sharebar::{Document, Element, OptionsOverride, ShareWidget};
//!
//! let document = Document::new("https://example.com/articles/42")
//!     .with_canonical("https://example.com/articles/42")
//!     .with_title("An article worth sharing");
//!
//! let widget = ShareWidget::bind(document, Element::new("div"), OptionsOverride::default())
//!     .expect("element not yet bound");
//! let html = widget.element().to_html();
//! assert!(html.contains("data-share-service=\"twitter\""));
//! ```

pub mod api;
pub mod constants;
pub mod dom;
pub mod models;
pub mod services;
pub mod utils;
pub mod widget;

// Re-export the public surface
pub use dom::{Document, Element, Location, Node};
pub use models::{Localized, Options, OptionsOverride, Orientation, Service, Theme, UrlSource};
pub use services::ServiceId;
pub use utils::navigation::{Navigator, SystemNavigator};
pub use widget::ShareWidget;
