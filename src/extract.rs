use scraper::{Html, Selector};

use crate::ScrapeError;

/// Parses a decoded response body into a document.
///
/// Malformed markup is recovered the way browsers do, so this never fails.
pub(crate) fn parse_document(body: &str) -> Html {
    Html::parse_document(body)
}

/// Concatenates the text of every element matching `selector`, in document
/// order, and trims the result.
pub(crate) fn select_text(document: &Html, selector: &str) -> Result<String, ScrapeError> {
    let selector = Selector::parse(selector)
        .map_err(|err| ScrapeError::Selector(format!("`{selector}`: {err}")))?;

    let text: String = document
        .select(&selector)
        .flat_map(|element| element.text())
        .collect();

    Ok(text.trim().to_owned())
}

#[cfg(test)]
mod tests {
    use super::{parse_document, select_text};
    use crate::ScrapeError;

    fn select(html: &str, selector: &str) -> String {
        let document = parse_document(html);
        select_text(&document, selector).expect("selector must be valid")
    }

    #[test]
    fn trims_single_match() {
        assert_eq!(
            select(r#"<div class="price">  $9.99 </div>"#, ".price"),
            "$9.99"
        );
    }

    #[test]
    fn concatenates_matches_in_document_order() {
        let html = r#"
            <ul>
              <li class="item">one</li>
              <li>skip</li>
              <li class="item"> two <b>bold</b></li>
            </ul>
        "#;
        assert_eq!(select(html, ".item"), "one two bold");
    }

    #[test]
    fn no_match_yields_empty_string() {
        assert_eq!(select("<p>hello</p>", ".missing"), "");
    }

    #[test]
    fn invalid_selector_is_reported() {
        let document = parse_document("<p>hello</p>");
        let err = select_text(&document, "p[").expect_err("selector must be rejected");
        assert!(matches!(err, ScrapeError::Selector(_)));
    }

    #[test]
    fn malformed_markup_is_recovered() {
        assert_eq!(select("<div class=a><p>one<p>two</div", ".a p"), "onetwo");
    }
}
