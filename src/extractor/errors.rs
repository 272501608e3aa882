use thiserror::Error;

use crate::fetcher::FetchError;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error(
        "This appears to be a journal homepage, not a specific article. Please provide a direct link to an article instead of the journal's main page."
    )]
    NotAnArticle,

    #[error("Unable to fetch the article: {0}")]
    Fetch(#[from] FetchError),

    #[error(
        "Unable to extract article content. The website may not allow automated content extraction."
    )]
    NoContent,
}

impl From<url::ParseError> for ExtractError {
    fn from(err: url::ParseError) -> Self {
        Self::Fetch(FetchError::InvalidUrl(err))
    }
}
