use anyhow::Result;
use async_trait::async_trait;
use url::Url;

use crate::model::ImageData;

/// Trait representing a network capability.  The runtime provides a host
/// implementation backed by `reqwest`; tests and embedders can supply their
/// own.  One call is one GET.
#[async_trait]
pub trait NetworkAdapter: Send + Sync {
    async fn get(&self, url: &Url) -> Result<NetworkResponse>;
}

/// Response returned by the network adapter.  `body` is `None` when the
/// transport had nothing to hand back; an empty vector means the same thing to
/// the fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkResponse {
    pub status: u16,
    pub body: Option<Vec<u8>>,
}

impl NetworkResponse {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self { status: 200, body: Some(body.into()) }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait representing an image decoding capability.  Implementations must
/// reject bytes that do not form a complete image.
pub trait ImageDecoder: Send + Sync {
    fn decode_image(&self, bytes: &[u8]) -> Result<ImageData>;
}
