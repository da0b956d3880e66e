use reqwest::Client;

/// Builds the HTTP client shared by the Google API adapters.
///
/// A bounded timeout keeps a stalled collaborator call from hanging the
/// request; timeouts surface through the adapters as unavailability errors.
pub fn http_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .unwrap_or_default()
}
