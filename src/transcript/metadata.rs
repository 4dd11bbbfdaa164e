use log::debug;
use scraper::{Html, Selector};

/// Title used when a page exposes none.
pub const UNTITLED_RECIPE: &str = "Untitled Recipe";
/// Author used when a page exposes none.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Title and channel name scraped from a video page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub author: String,
}

/// Extract the video title and author from the page HTML.
///
/// Open Graph and `<meta>` tags are preferred; the document `<title>` is the last resort
/// for the title. Missing values fall back to [`UNTITLED_RECIPE`] and [`UNKNOWN_AUTHOR`].
pub fn page_metadata(html: &str) -> PageMetadata {
    let document = Html::parse_document(html);

    let title = first_attr(
        &document,
        &[
            ("meta[property='og:title']", "content"),
            ("meta[name='title']", "content"),
        ],
    )
    .or_else(|| first_text(&document, "title"))
    .unwrap_or_else(|| UNTITLED_RECIPE.to_string());

    let author = first_attr(
        &document,
        &[
            ("span[itemprop='author'] link[itemprop='name']", "content"),
            ("link[itemprop='name']", "content"),
            ("meta[name='author']", "content"),
        ],
    )
    .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

    debug!("Page metadata: title={:?}, author={:?}", title, author);
    PageMetadata { title, author }
}

/// First non-empty attribute value among `(selector, attribute)` candidates.
fn first_attr(document: &Html, candidates: &[(&str, &str)]) -> Option<String> {
    candidates.iter().find_map(|(selector, attr)| {
        let selector = Selector::parse(selector).ok()?;
        document
            .select(&selector)
            .filter_map(|el| el.value().attr(attr))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
    })
}

fn first_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .map(|el| el.text().collect::<Vec<_>>().join(" ").trim().to_string())
        .find(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_graph_and_itemprop() {
        let html = r#"
            <html>
            <head>
                <title>Fluffy Pancakes - YouTube</title>
                <meta property="og:title" content="Fluffy Pancakes">
            </head>
            <body>
                <span itemprop="author" itemscope itemtype="http://schema.org/Person">
                    <link itemprop="url" href="http://www.youtube.com/@chef">
                    <link itemprop="name" content="Chef John">
                </span>
            </body>
            </html>
        "#;

        let metadata = page_metadata(html);
        assert_eq!(metadata.title, "Fluffy Pancakes");
        assert_eq!(metadata.author, "Chef John");
    }

    #[test]
    fn test_falls_back_to_title_tag_and_meta_author() {
        let html = r#"
            <html>
            <head>
                <title> Weeknight Curry </title>
                <meta name="author" content="Home Cook">
            </head>
            <body></body>
            </html>
        "#;

        let metadata = page_metadata(html);
        assert_eq!(metadata.title, "Weeknight Curry");
        assert_eq!(metadata.author, "Home Cook");
    }

    #[test]
    fn test_defaults_when_nothing_found() {
        let metadata = page_metadata("<html><body><p>nothing here</p></body></html>");
        assert_eq!(metadata.title, UNTITLED_RECIPE);
        assert_eq!(metadata.author, UNKNOWN_AUTHOR);
    }

    #[test]
    fn test_empty_attributes_are_skipped() {
        let html = r#"
            <html><head>
                <meta property="og:title" content="  ">
                <meta name="title" content="Real Title">
            </head></html>
        "#;

        assert_eq!(page_metadata(html).title, "Real Title");
    }
}
