//! Navigation boundary for activated share links.
//!
//! Popup-marked links open a sized secondary window, the rest a new tab.
//! Hosts with a real windowing surface implement [`Navigator`] themselves;
//! the stock implementation hands both cases to the system browser.

/// How an activated share link reaches the browser.
pub trait Navigator {
    /// Open `url` in a secondary window of the given size, named
    /// `window_name` (the anchor's title).
    fn open_popup(
        &mut self,
        url: &str,
        window_name: &str,
        width: u32,
        height: u32,
    ) -> Result<(), String>;

    /// Open `url` in a new tab.
    fn open_tab(&mut self, url: &str) -> Result<(), String>;
}

/// Opens share targets through the system browser. The popup sizing is
/// advisory here: the OS browser decides its own window geometry.
pub struct SystemNavigator;

impl Navigator for SystemNavigator {
    fn open_popup(
        &mut self,
        url: &str,
        window_name: &str,
        width: u32,
        height: u32,
    ) -> Result<(), String> {
        log::debug!(
            "[Navigation] Opening popup {}x{} ({:?}): {}",
            width,
            height,
            window_name,
            url
        );
        webbrowser::open(url).map_err(|e| format!("Failed to open browser: {}", e))
    }

    fn open_tab(&mut self, url: &str) -> Result<(), String> {
        log::debug!("[Navigation] Opening tab: {}", url);
        webbrowser::open(url).map_err(|e| format!("Failed to open browser: {}", e))
    }
}
