use once_cell::sync::Lazy;
use reqwest::Client;

static CLIENT: Lazy<Client> = Lazy::new(Client::new);

/// Shared HTTP client used by all backend requests.
pub fn client() -> &'static Client {
    &CLIENT
}
