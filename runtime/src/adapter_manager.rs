use anyhow::Result;
use image_adapter::ImageCrateDecoder;
use network_adapter::HostFetch;
use request_easy_service::api::{ImageDecoder, NetworkAdapter};
use tracing::info;

use crate::config::FetcherConfig;

/// Records which implementation was chosen and the host environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterBinding {
    pub impl_name: String,
    pub host: String,
}

/// Holds the network and image capabilities a fetcher runs against.  The
/// host implementations (`reqwest` and `image`) are the default; callers can
/// bind their own instead.
pub(crate) struct AdapterManager {
    pub(crate) network: Box<dyn NetworkAdapter>,
    pub(crate) images: Box<dyn ImageDecoder>,
    pub(crate) binding: AdapterBinding,
}

impl AdapterManager {
    /// Bind the host adapters, passing the timeout and user agent through to
    /// the HTTP client.
    pub(crate) fn host(config: &FetcherConfig) -> Result<Self> {
        let network = HostFetch::new(config.timeout(), &config.user_agent)?;
        Ok(Self::bind(Box::new(network), Box::new(ImageCrateDecoder), "host-fetch"))
    }

    pub(crate) fn custom(network: Box<dyn NetworkAdapter>, images: Box<dyn ImageDecoder>) -> Self {
        Self::bind(network, images, "custom")
    }

    fn bind(network: Box<dyn NetworkAdapter>, images: Box<dyn ImageDecoder>, impl_name: &str) -> Self {
        let binding = AdapterBinding {
            impl_name: impl_name.to_string(),
            host: std::env::consts::OS.to_string(),
        };
        info!(target: "request_easy.adapter", impl_name = %binding.impl_name, host = %binding.host, "adapters bound");
        Self { network, images, binding }
    }
}
