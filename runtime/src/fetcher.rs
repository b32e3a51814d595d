use anyhow::Result;
use request_easy_service::api::{ImageDecoder, NetworkAdapter};
use request_easy_service::error::{FetchError, FetchResult};
use request_easy_service::model::{DecodedValue, ResponseType};
use request_easy_service::{decode, status_message};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use url::Url;

use crate::adapter_manager::{AdapterBinding, AdapterManager};
use crate::blocking::block_on;
use crate::config::FetcherConfig;

/// Issues GET requests and decodes their bodies.  Holds no per-request
/// state; clones share the same adapters and configuration.
#[derive(Clone)]
pub struct Fetcher {
    adapters: Arc<AdapterManager>,
    config: Arc<FetcherConfig>,
}

impl Fetcher {
    /// Bind the host adapters with the given configuration.
    pub fn new(config: FetcherConfig) -> Result<Self> {
        let adapters = AdapterManager::host(&config)?;
        Ok(Self { adapters: Arc::new(adapters), config: Arc::new(config) })
    }

    /// Bind the host adapters with configuration read from the environment.
    pub fn from_env() -> Result<Self> {
        Self::new(FetcherConfig::from_env()?)
    }

    /// Run against caller supplied capabilities.  The configuration's
    /// timeout and user agent are not applied to a custom network adapter.
    pub fn with_adapters<N, I>(network: N, images: I, config: FetcherConfig) -> Self
    where
        N: NetworkAdapter + 'static,
        I: ImageDecoder + 'static,
    {
        let adapters = AdapterManager::custom(Box::new(network), Box::new(images));
        Self { adapters: Arc::new(adapters), config: Arc::new(config) }
    }

    pub fn binding(&self) -> &AdapterBinding {
        &self.adapters.binding
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Perform one GET and return the raw body.
    ///
    /// A string that is not an absolute URL fails with `InvalidUrl` before
    /// anything is sent.  Transport failures, an empty body and (when
    /// configured) a non-2xx status are all returned as errors.
    pub async fn fetch(&self, url: &str) -> FetchResult<Vec<u8>> {
        let parsed = Url::parse(url).map_err(|err| {
            debug!(target: "request_easy.fetch", url, error = %err, "rejected url");
            FetchError::InvalidUrl { url: url.to_string() }
        })?;

        debug!(target: "request_easy.fetch", url = %parsed, "issuing GET");
        let resp = self.adapters.network.get(&parsed).await.map_err(|err| {
            warn!(target: "request_easy.fetch", url = %parsed, error = %err, "transport failed");
            FetchError::Transport(format!("{:#}", err))
        })?;

        if self.config.reject_error_status && !resp.is_success() {
            warn!(target: "request_easy.fetch", url = %parsed, status = resp.status, "error status rejected");
            return Err(FetchError::Transport(status_message(resp.status)));
        }

        match resp.body {
            Some(body) if !body.is_empty() => {
                debug!(target: "request_easy.fetch", url = %parsed, status = resp.status, len = body.len(), "GET complete");
                Ok(body)
            }
            _ => Err(FetchError::EmptyResponse),
        }
    }

    /// Fetch then decode the body as `response_type`.
    pub async fn get(&self, url: &str, response_type: &ResponseType) -> FetchResult<DecodedValue> {
        let body = self.fetch(url).await?;
        decode(&body, response_type, self.adapters.images.as_ref()).map_err(|err| {
            warn!(target: "request_easy.fetch", url, response_type = response_type.name(), error = %err, "decode failed");
            err
        })
    }

    /// Callback form of [`Fetcher::get`].  The request runs as a task on the
    /// current tokio runtime and `completion` is called exactly once with its
    /// result.  Outside a runtime nothing is spawned: `completion` receives a
    /// `FetchError::Runtime` immediately and `None` is returned.
    pub fn spawn_get<F>(
        &self,
        url: impl Into<String>,
        response_type: ResponseType,
        completion: F,
    ) -> Option<JoinHandle<()>>
    where
        F: FnOnce(FetchResult<DecodedValue>) + Send + 'static,
    {
        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                warn!(target: "request_easy.fetch", "spawn_get called outside a tokio runtime");
                completion(Err(FetchError::Runtime("spawn_get called outside a tokio runtime".to_string())));
                return None;
            }
        };
        let fetcher = self.clone();
        let url = url.into();
        Some(handle.spawn(async move {
            let result = fetcher.get(&url, &response_type).await;
            completion(result);
        }))
    }

    /// Blocking form of [`Fetcher::fetch`].  Refused with
    /// `FetchError::Runtime` when called from inside an async runtime.
    pub fn fetch_blocking(&self, url: &str) -> FetchResult<Vec<u8>> {
        block_on(self.fetch(url))?
    }

    /// Blocking form of [`Fetcher::get`].
    pub fn get_blocking(&self, url: &str, response_type: &ResponseType) -> FetchResult<DecodedValue> {
        block_on(self.get(url, response_type))?
    }
}
