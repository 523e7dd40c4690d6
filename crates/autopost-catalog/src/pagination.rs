//! Cursor pagination via the `Link` response header.
//!
//! Storefronts return adjacent-page URLs in a `Link` header; the cursor is the
//! `page_info` query parameter of the `rel="next"` entry:
//!
//! ```text
//! <https://shop.example/products.json?limit=250&page_info=PREV>; rel="previous",
//! <https://shop.example/products.json?limit=250&page_info=NEXT>; rel="next"
//! ```

/// Returns the `page_info` cursor of the `rel="next"` link, or `None` on the
/// last page (no header, no next entry, or no cursor in its URL).
#[must_use]
pub fn extract_next_cursor(link_header: Option<&str>) -> Option<String> {
    let next = link_header?
        .split(',')
        .map(str::trim)
        .find(|entry| entry.contains(r#"rel="next""#))?;

    let url = bracketed_url(next)?;
    query_param(url, "page_info")
}

fn bracketed_url(entry: &str) -> Option<&str> {
    let (_, rest) = entry.split_once('<')?;
    let (url, _) = rest.split_once('>')?;
    (!url.is_empty()).then_some(url)
}

/// Cursor values are base64url, so no percent-decoding is applied.
fn query_param(url: &str, name: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    let query = query.split('#').next().unwrap_or(query);
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, value)| *key == name && !value.is_empty())
        .map(|(_, value)| value.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_header_means_last_page() {
        assert!(extract_next_cursor(None).is_none());
        assert!(extract_next_cursor(Some("")).is_none());
    }

    #[test]
    fn single_next_link() {
        let header = r#"<https://nova.example.com/products.json?limit=250&page_info=eyJsYXN0X2lkIjo2fQ>; rel="next""#;
        assert_eq!(
            extract_next_cursor(Some(header)).as_deref(),
            Some("eyJsYXN0X2lkIjo2fQ")
        );
    }

    #[test]
    fn previous_and_next_links() {
        let header = concat!(
            r#"<https://nova.example.com/products.json?limit=250&page_info=PREV>; rel="previous",   "#,
            r#"<https://nova.example.com/products.json?limit=250&page_info=NEXT>; rel="next""#
        );
        assert_eq!(extract_next_cursor(Some(header)).as_deref(), Some("NEXT"));
    }

    #[test]
    fn only_previous_link_means_last_page() {
        let header = r#"<https://nova.example.com/products.json?limit=250&page_info=PREV>; rel="previous""#;
        assert!(extract_next_cursor(Some(header)).is_none());
    }

    #[test]
    fn next_link_without_cursor() {
        let header = r#"<https://nova.example.com/products.json?limit=250>; rel="next""#;
        assert!(extract_next_cursor(Some(header)).is_none());
    }

    #[test]
    fn cursor_with_fragment_is_trimmed() {
        assert_eq!(
            query_param("https://x.test/p.json?page_info=ABC#top", "page_info").as_deref(),
            Some("ABC")
        );
    }

    #[test]
    fn bracketed_url_requires_brackets() {
        assert!(bracketed_url("no brackets").is_none());
        assert!(bracketed_url("<>; rel=\"next\"").is_none());
        assert_eq!(bracketed_url("<https://x.test/a>; rel=\"next\""), Some("https://x.test/a"));
    }
}
