use scraper::{Html, Selector};
use std::collections::BTreeSet;
use url::Url;

/// Extract candidate article links from a page.
///
/// Keeps only links that stay on the same host as `base` and look like
/// article pages: fragments and query strings are stripped, and
/// namespace pages (paths containing `:`, e.g. /wiki/File:Foo.png) are
/// dropped. The BTreeSet fixes the enumeration order lexicographically,
/// which makes selection tie-breaks deterministic.
pub fn extract_article_links(html: &str, base: &Url) -> BTreeSet<Url> {
    let document = Html::parse_document(html);
    let link_selector = Selector::parse("a[href]").unwrap();

    let mut links = BTreeSet::new();
    for element in document.select(&link_selector) {
        if let Some(href) = element.value().attr("href")
            && let Some(url) = resolve_article_url(base, href)
        {
            links.insert(url);
        }
    }

    links
}

fn resolve_article_url(base: &Url, href: &str) -> Option<Url> {
    // Skip empty, javascript:, mailto:, tel:, and pure-fragment links
    if href.is_empty()
        || href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with('#')
    {
        return None;
    }

    let mut resolved = base.join(href).ok()?;
    resolved.set_fragment(None);
    resolved.set_query(None);

    // Stay on the same wiki
    if resolved.host_str() != base.host_str() {
        return None;
    }

    // Namespace pages (File:, Category:, Special:...) are not articles
    if resolved.path().contains(':') {
        return None;
    }

    Some(resolved)
}

/// Extract a human-readable page title to use as the search keyword.
///
/// Tries the MediaWiki main-title span first, then the classic
/// #firstHeading h1, then the document title.
pub fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    for css in ["span.mw-page-title-main", "h1#firstHeading", "title"] {
        let selector = Selector::parse(css).unwrap();
        if let Some(element) = document.select(&selector).next() {
            let text = element.text().collect::<String>();
            let text = text.trim().trim_end_matches(" - Wikipedia").trim();
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://en.wikipedia.org/wiki/Rust").unwrap()
    }

    #[test]
    fn test_extracts_same_host_links() {
        let html = r#"<html><body>
            <a href="/wiki/Iron">Iron</a>
            <a href="https://en.wikipedia.org/wiki/Oxygen">Oxygen</a>
        </body></html>"#;

        let links = extract_article_links(html, &base());
        let urls: Vec<String> = links.iter().map(|u| u.to_string()).collect();

        assert_eq!(
            urls,
            vec![
                "https://en.wikipedia.org/wiki/Iron",
                "https://en.wikipedia.org/wiki/Oxygen",
            ]
        );
    }

    #[test]
    fn test_drops_cross_host_links() {
        let html = r#"<a href="https://de.wikipedia.org/wiki/Eisen">Eisen</a>"#;
        let links = extract_article_links(html, &base());
        assert!(links.is_empty());
    }

    #[test]
    fn test_drops_namespace_pages() {
        let html = r#"<body>
            <a href="/wiki/File:Rust.png">image</a>
            <a href="/wiki/Category:Metals">category</a>
            <a href="/wiki/Corrosion">article</a>
        </body>"#;

        let links = extract_article_links(html, &base());
        assert_eq!(links.len(), 1);
        assert_eq!(
            links.iter().next().unwrap().path(),
            "/wiki/Corrosion"
        );
    }

    #[test]
    fn test_strips_fragments_and_queries() {
        let html = r#"<a href="/wiki/Iron?action=edit#History">Iron</a>"#;
        let links = extract_article_links(html, &base());
        assert_eq!(
            links.iter().next().unwrap().to_string(),
            "https://en.wikipedia.org/wiki/Iron"
        );
    }

    #[test]
    fn test_skips_non_http_schemes_and_fragments() {
        let html = r##"<body>
            <a href="javascript:void(0)">js</a>
            <a href="mailto:a@b.c">mail</a>
            <a href="#top">top</a>
            <a href="">empty</a>
        </body>"##;
        let links = extract_article_links(html, &base());
        assert!(links.is_empty());
    }

    #[test]
    fn test_deduplicates_links() {
        let html = r#"<body>
            <a href="/wiki/Iron">once</a>
            <a href="/wiki/Iron#Uses">twice</a>
        </body>"#;
        let links = extract_article_links(html, &base());
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn test_title_from_mw_span() {
        let html = r#"<h1 id="firstHeading"><span class="mw-page-title-main">Peace</span></h1>"#;
        assert_eq!(extract_title(html), Some("Peace".to_string()));
    }

    #[test]
    fn test_title_falls_back_to_first_heading() {
        let html = r#"<h1 id="firstHeading">Peace</h1>"#;
        assert_eq!(extract_title(html), Some("Peace".to_string()));
    }

    #[test]
    fn test_title_falls_back_to_document_title() {
        let html = "<html><head><title>Peace - Wikipedia</title></head><body></body></html>";
        assert_eq!(extract_title(html), Some("Peace".to_string()));
    }

    #[test]
    fn test_title_missing() {
        let html = "<html><body><p>nothing here</p></body></html>";
        assert_eq!(extract_title(html), None);
    }
}
