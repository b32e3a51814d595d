//! Host network adapter implementation.  This crate provides a `HostFetch`
//! struct implementing the `NetworkAdapter` trait defined in the
//! `request_easy_service` crate.  It uses the async `reqwest` client to
//! perform one GET per call; connection pooling, TLS and redirects are left to
//! `reqwest`.

use anyhow::{Context, Result};
use async_trait::async_trait;
use request_easy_service::api::{NetworkAdapter, NetworkResponse};
use std::time::Duration;
use tracing::debug;
use url::Url;

pub struct HostFetch {
    client: reqwest::Client,
}

impl HostFetch {
    /// Build a client with an optional whole-request timeout and the given
    /// user agent.  Without a timeout a request may wait indefinitely.
    pub fn new(timeout: Option<Duration>, user_agent: &str) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("failed to build HTTP client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl NetworkAdapter for HostFetch {
    async fn get(&self, url: &Url) -> Result<NetworkResponse> {
        let resp = self.client.get(url.clone()).send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?;
        debug!(target: "request_easy.adapter", %url, status, len = body.len(), "host fetch complete");
        let body = if body.is_empty() { None } else { Some(body.to_vec()) };
        Ok(NetworkResponse { status, body })
    }
}
