//! Low-level access to the MediaWiki `action=query` envelope.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Commons API request failed")]
    Request(#[from] reqwest::Error),

    #[error("API response contained no pages")]
    NoPages,

    #[error("API response contained {0} pages, expected exactly one")]
    MultiplePages(usize),

    #[error("API response is missing expected field: {0}")]
    MissingField(&'static str),
}

/// Builds the full query URL for a titles lookup.
///
/// `title` is appended to the query string as-is. The caller has to supply a
/// title that is already safe to embed in a URL.
pub(crate) fn query_url(base_url: &str, prop: &str, iiprop: Option<&str>, title: &str) -> String {
    let mut url = format!("{base_url}?action=query&prop={prop}");
    if let Some(iiprop) = iiprop {
        url.push_str("&iiprop=");
        url.push_str(iiprop);
    }
    url.push_str("&format=json&titles=");
    url.push_str(title);
    url
}

/// Performs the GET request and decodes the JSON body. Transport failures,
/// non-2xx statuses and malformed JSON all surface as [`QueryError::Request`].
pub(crate) async fn fetch(http: &reqwest::Client, url: &str) -> Result<Value, QueryError> {
    debug!(%url, "querying Commons API");
    let response = http.get(url).send().await?.error_for_status()?;
    Ok(response.json().await?)
}

/// Returns the single page object of a query response.
///
/// The API keys its results by a server-assigned page id that is not known
/// up front. Exactly one page is expected per request; zero or multiple
/// pages violate that invariant and fail with a typed error.
pub(crate) fn single_page(document: &Value) -> Result<&Value, QueryError> {
    let pages = document
        .get("query")
        .ok_or(QueryError::MissingField("query"))?
        .get("pages")
        .and_then(Value::as_object)
        .ok_or(QueryError::MissingField("pages"))?;

    let mut entries = pages.values();
    let page = entries.next().ok_or(QueryError::NoPages)?;
    if entries.next().is_some() {
        return Err(QueryError::MultiplePages(pages.len()));
    }
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_url_with_iiprop() {
        let url = query_url(
            "https://commons.wikimedia.org/w/api.php",
            "imageinfo",
            Some("commonmetadata"),
            "File:Example.jpg",
        );
        assert_eq!(
            url,
            "https://commons.wikimedia.org/w/api.php?action=query&prop=imageinfo&iiprop=commonmetadata&format=json&titles=File:Example.jpg"
        );
    }

    #[test]
    fn test_query_url_without_iiprop() {
        let url = query_url(
            "https://commons.wikimedia.org/w/api.php",
            "coordinates",
            None,
            "File:Example.jpg",
        );
        assert_eq!(
            url,
            "https://commons.wikimedia.org/w/api.php?action=query&prop=coordinates&format=json&titles=File:Example.jpg"
        );
    }

    #[test]
    fn test_query_url_does_not_encode_the_title() {
        // Titles are passed through untouched, spaces included.
        let url = query_url("http://host/api.php", "imageinfo", None, "File:a b.jpg");
        assert!(url.ends_with("&titles=File:a b.jpg"));
    }

    #[test]
    fn test_single_page_returns_the_only_page() {
        let document = json!({
            "query": { "pages": { "12345": { "title": "File:Example.jpg" } } }
        });

        let page = single_page(&document).unwrap();
        assert_eq!(page["title"], "File:Example.jpg");
    }

    #[test]
    fn test_single_page_fails_on_empty_pages() {
        let document = json!({ "query": { "pages": {} } });

        let result = single_page(&document);
        assert!(matches!(result.unwrap_err(), QueryError::NoPages));
    }

    #[test]
    fn test_single_page_fails_on_multiple_pages() {
        let document = json!({
            "query": { "pages": { "1": {}, "2": {} } }
        });

        let result = single_page(&document);
        assert!(matches!(result.unwrap_err(), QueryError::MultiplePages(2)));
    }

    #[test]
    fn test_single_page_fails_when_query_is_missing() {
        let document = json!({ "batchcomplete": "" });

        let result = single_page(&document);
        assert!(
            matches!(result.unwrap_err(), QueryError::MissingField(field) if field == "query")
        );
    }

    #[test]
    fn test_single_page_fails_when_pages_is_missing() {
        let document = json!({ "query": {} });

        let result = single_page(&document);
        assert!(
            matches!(result.unwrap_err(), QueryError::MissingField(field) if field == "pages")
        );
    }
}
