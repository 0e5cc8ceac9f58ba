// Share count backend endpoint
use std::collections::HashMap;

/// Fetch share counts for `share_url` from the count backend.
///
/// Issues one GET to `backend_url` with the page URL as query parameter and
/// expects a JSON object mapping service name to numeric count.
pub async fn fetch_counts(
    backend_url: &str,
    share_url: &str,
) -> Result<HashMap<String, u64>, Box<dyn std::error::Error>> {
    let request_url = format!("{}?url={}", backend_url, urlencoding::encode(share_url));

    log::debug!("[Counts] Fetching share counts: {}", request_url);

    let response = crate::utils::http::client().get(&request_url).send().await?;

    if !response.status().is_success() {
        return Err(format!("Backend returned status: {}", response.status()).into());
    }

    let counts: HashMap<String, u64> = response.json().await?;

    log::debug!("[Counts] Received counts for {} services", counts.len());

    Ok(counts)
}
