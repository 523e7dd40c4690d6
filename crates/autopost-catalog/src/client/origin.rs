//! URL origin and domain extraction for the storefront client.

/// Extracts the scheme+host origin from a store URL.
///
/// Given `"https://nova.example.com/collections/all"`, returns
/// `"https://nova.example.com"`, so `products.json` is always fetched from the
/// store root.
#[must_use]
pub fn extract_store_origin(store_url: &str) -> String {
    reqwest::Url::parse(store_url).map_or_else(
        |e| {
            tracing::warn!(
                store_url,
                error = %e,
                "could not parse store URL; falling back to string split for origin"
            );
            store_url
                .trim_end_matches('/')
                .splitn(4, '/')
                .take(3)
                .collect::<Vec<_>>()
                .join("/")
        },
        |u| u.origin().ascii_serialization(),
    )
}

/// Extracts the hostname from a store URL for error messages.
///
/// Falls back to the full URL string if parsing fails.
pub(super) fn extract_domain(store_url: &str) -> String {
    reqwest::Url::parse(store_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_else(|| store_url.to_owned())
}
