//! State holder for presenting one remote value.  A UI layer owns a
//! `RemoteValue`, calls `load` whenever its view appears and renders from
//! `state()`.

use request_easy_service::error::FetchError;
use request_easy_service::model::DecodedValue;
use tracing::warn;

use crate::builder::Request;
use crate::fetcher::Fetcher;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded(DecodedValue),
    Failed(FetchError),
}

pub struct RemoteValue {
    request: Request,
    state: LoadState,
}

impl RemoteValue {
    pub fn new(request: Request) -> Self {
        Self { request, state: LoadState::Idle }
    }

    /// An image loaded from `url`.
    pub fn image(url: impl Into<String>) -> Self {
        Self::new(Request::get(url).image())
    }

    /// A text body loaded from `url`.
    pub fn text(url: impl Into<String>) -> Self {
        Self::new(Request::get(url).text())
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn value(&self) -> Option<&DecodedValue> {
        match &self.state {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Fetch again, whatever the current state.  Failures are kept in the
    /// state rather than returned.
    pub async fn load(&mut self, fetcher: &Fetcher) -> &LoadState {
        self.state = LoadState::Loading;
        self.state = match self.request.send(fetcher).await {
            Ok(value) => LoadState::Loaded(value),
            Err(err) => {
                warn!(target: "request_easy.fetch", url = self.request.url(), error = %err, "remote value failed to load");
                LoadState::Failed(err)
            }
        };
        &self.state
    }
}
