use scraper::{ElementRef, Html, Node, Selector};

use crate::text::collapse_whitespace;

pub const UNTITLED: &str = "Untitled";

/// Elements whose contents are never reader-visible prose.
const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// Raw text of `element`, skipping script-like subtrees. Whitespace is kept
/// as it appears in the markup.
pub fn element_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    collect_text(element, &mut out);
    out
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if SKIPPED_TAGS.contains(&el.name()) => {}
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    collect_text(child, out);
                }
            }
            _ => {}
        }
    }
}

/// Text of each element with whitespace collapsed, blanks dropped, joined
/// with single spaces.
pub fn join_texts<'a>(elements: impl Iterator<Item = ElementRef<'a>>) -> String {
    elements
        .map(|element| collapse_whitespace(&element_text(element)))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `<title>` text, or [`UNTITLED`] when missing or blank.
pub fn title(document: &Html) -> String {
    Selector::parse("title")
        .ok()
        .and_then(|selector| {
            document
                .select(&selector)
                .map(|element| collapse_whitespace(&element_text(element)))
                .find(|title| !title.is_empty())
        })
        .unwrap_or_else(|| UNTITLED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_text_skips_scripts() {
        let document = Html::parse_document(
            "<html><body><p>Visible <script>var hidden = 1;</script>text<style>p{}</style></p></body></html>",
        );
        let selector = Selector::parse("p").unwrap();
        let paragraph = document.select(&selector).next().unwrap();
        assert_eq!(element_text(paragraph), "Visible text");
    }

    #[test]
    fn test_title_is_trimmed() {
        let document =
            Html::parse_document("<html><head><title>\n  A   Title \n</title></head></html>");
        assert_eq!(title(&document), "A Title");
    }

    #[test]
    fn test_missing_or_blank_title_is_untitled() {
        let document = Html::parse_document("<html><body><p>No title</p></body></html>");
        assert_eq!(title(&document), UNTITLED);

        let document = Html::parse_document("<html><head><title>  </title></head></html>");
        assert_eq!(title(&document), UNTITLED);
    }

    #[test]
    fn test_join_texts_collapses_and_skips_blanks() {
        let document = Html::parse_document(
            "<html><body><p>One\n  two</p><p>   </p><p>three</p></body></html>",
        );
        let selector = Selector::parse("p").unwrap();
        assert_eq!(join_texts(document.select(&selector)), "One two three");
    }
}
