use request_easy_service::error::{FetchError, FetchResult};
use std::future::Future;
use tokio::runtime::{Builder, Handle};
use tracing::warn;

/// Run a future to completion on the calling thread.
///
/// A fresh current-thread runtime drives the future, so the completion never
/// depends on some other executor making progress.  Calling this from inside a
/// tokio runtime would block that runtime's worker; it is refused with
/// `FetchError::Runtime` instead.
pub(crate) fn block_on<F: Future>(future: F) -> FetchResult<F::Output> {
    if Handle::try_current().is_ok() {
        warn!(target: "request_easy.blocking", "blocking call refused inside an async runtime");
        return Err(FetchError::Runtime("blocking call from inside an async runtime".to_string()));
    }
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| FetchError::Runtime(format!("failed to start runtime: {}", err)))?;
    Ok(runtime.block_on(future))
}
