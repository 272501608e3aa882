use serde::{Deserialize, Serialize};
use url::Url;

/// Which heuristic produced the article text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    ContentContainer,
    AllParagraphs,
    FilteredElements,
    BodyChunks,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContentContainer => "content_container",
            Self::AllParagraphs => "all_paragraphs",
            Self::FilteredElements => "filtered_elements",
            Self::BodyChunks => "body_chunks",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub url: Url,
    pub title: String,
    /// Never blank.
    pub text: String,
    pub strategy: Strategy,
    pub language: Option<String>,
}
