use wikirace::handlers::parse_article_url;

#[test]
fn test_parse_article_url_with_scheme() {
    let result = parse_article_url("https://en.wikipedia.org/wiki/Peace");
    assert_eq!(
        result,
        Some("https://en.wikipedia.org/wiki/Peace".to_string())
    );
}

#[test]
fn test_parse_article_url_without_scheme() {
    let result = parse_article_url("en.wikipedia.org/wiki/Peace");
    assert_eq!(
        result,
        Some("https://en.wikipedia.org/wiki/Peace".to_string())
    );
}

#[test]
fn test_parse_article_url_invalid() {
    let result = parse_article_url("not a valid url!!!");
    assert_eq!(result, None);
}
