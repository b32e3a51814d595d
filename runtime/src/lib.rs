//! request_easy: one HTTP GET, decoded into the shape the caller asks for.
//! This crate binds the network and image adapters, runs the request (async,
//! callback or blocking) and hands the body to the pure decoder in
//! `request_easy_service`.
//!
//! ```no_run
//! use request_easy::{Fetcher, FetcherConfig, ResponseType};
//!
//! # fn main() -> anyhow::Result<()> {
//! let fetcher = Fetcher::new(FetcherConfig::default())?;
//! let count = fetcher.get_blocking("https://example.com/count", &ResponseType::Integer)?;
//! println!("{:?}", count.as_integer());
//! # Ok(())
//! # }
//! ```

mod adapter_manager;
mod blocking;
mod builder;
mod config;
mod fetcher;
mod view_model;

pub use crate::adapter_manager::AdapterBinding;
pub use crate::builder::Request;
pub use crate::config::{ConfigError, FetcherConfig};
pub use crate::fetcher::Fetcher;
pub use crate::view_model::{LoadState, RemoteValue};

pub use request_easy_service::api::{ImageDecoder, NetworkAdapter, NetworkResponse};
pub use request_easy_service::error::{ErrorKind, FetchError, FetchResult};
pub use request_easy_service::model::{DecodedValue, ImageData, KeyPath, ResponseType};
pub use request_easy_service::{decode, resolve_key_path};
