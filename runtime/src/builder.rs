use request_easy_service::error::FetchResult;
use request_easy_service::model::{DecodedValue, KeyPath, ResponseType};

use crate::fetcher::Fetcher;

/// A GET request described step by step:
///
/// ```no_run
/// # async fn run(fetcher: &request_easy::Fetcher) -> request_easy::FetchResult<()> {
/// let name = request_easy::Request::get("https://example.com/user.json")
///     .json_at("data/name")
///     .send(fetcher)
///     .await?;
/// # Ok(())
/// # }
/// ```
///
/// The response type defaults to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    url: String,
    response_type: ResponseType,
}

impl Request {
    pub fn get(url: impl Into<String>) -> Self {
        Self { url: url.into(), response_type: ResponseType::Text }
    }

    pub fn image(self) -> Self {
        self.response_type(ResponseType::Image)
    }

    pub fn text(self) -> Self {
        self.response_type(ResponseType::Text)
    }

    pub fn integer(self) -> Self {
        self.response_type(ResponseType::Integer)
    }

    pub fn json(self) -> Self {
        self.response_type(ResponseType::json())
    }

    /// JSON narrowed by a slash-delimited key-path.
    pub fn json_at(self, raw: &str) -> Self {
        self.response_type(ResponseType::json_at(raw))
    }

    pub fn key_path(self, path: impl Into<KeyPath>) -> Self {
        self.response_type(ResponseType::Json(Some(path.into())))
    }

    pub fn response_type(mut self, response_type: ResponseType) -> Self {
        self.response_type = response_type;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn expected(&self) -> &ResponseType {
        &self.response_type
    }

    pub async fn send(&self, fetcher: &Fetcher) -> FetchResult<DecodedValue> {
        fetcher.get(&self.url, &self.response_type).await
    }

    pub fn send_blocking(&self, fetcher: &Fetcher) -> FetchResult<DecodedValue> {
        fetcher.get_blocking(&self.url, &self.response_type)
    }
}
