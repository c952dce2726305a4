use url::Url;

/// Validate an article URL before handing it to the system opener.
///
/// Only http/https survive: article URLs come from a remote API, and the
/// opener must never be pointed at file://, javascript:, or other local
/// schemes a hostile response could smuggle in.
pub fn openable_url(raw: &str) -> Option<Url> {
    let url = Url::parse(raw).ok()?;
    match url.scheme() {
        "http" | "https" => Some(url),
        _ => None,
    }
}

/// Extract a short publisher domain from an article URL for display,
/// without the leading "www.".
pub fn source_domain(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;
    let host = url.host_str()?;
    Some(host.strip_prefix("www.").unwrap_or(host).to_string())
}
