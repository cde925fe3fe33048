use std::time::Duration;

/// classification of one upstream exchange
/// every lookup funnels its raw response through exactly one of these
/// before any line is printed or persisted
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    NotFound,
    UpstreamError(u16),
    TransportFailure(String),
}

/// fetch a url with an optional api-key header and an optional timeout
/// transport errors come back as the message string the caller will persist
pub async fn fetch(
    url: &str,
    api_header: Option<(&'static str, &str)>,
    timeout: Option<Duration>,
) -> Result<reqwest::Response, String> {
    let mut builder = reqwest::Client::builder();
    if let Some(t) = timeout {
        builder = builder.timeout(t);
    }
    let client = builder
        .build()
        .map_err(|err| format!("Failed to build client: {}", err))?;

    let mut req = client.get(url);
    if let Some((name, value)) = api_header {
        req = req.header(name, value);
    }

    req.send()
        .await
        .map_err(|err| format!("Failed to get response: {}", err))
}
