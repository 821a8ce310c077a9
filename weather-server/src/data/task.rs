//! Background dispatch for remote fetches.
//!
//! Each fetch runs as its own tokio task so slow feed responses never hold
//! up the caller's task. The caller submits the work and then waits for it
//! as a single unit; there is no partial delivery.

use std::future::Future;
use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::noaa::{RawStation, RemoteStationSource};

use super::error::DataError;

/// A dispatched fetch.
///
/// Awaiting [`join`](Self::join) yields the task's output, or
/// [`DataError::Cancelled`] if it was aborted. The data layer never aborts
/// its own tasks; [`abort`](Self::abort) is there for callers that do.
#[derive(Debug)]
pub struct FetchTask<T> {
    handle: JoinHandle<T>,
    failure: &'static str,
}

/// Spawn `future` on the runtime.
///
/// `failure` is the user-facing message if the task panics.
pub fn dispatch<F>(failure: &'static str, future: F) -> FetchTask<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    FetchTask {
        handle: tokio::spawn(future),
        failure,
    }
}

impl<T> FetchTask<T> {
    /// Stop the task. A later `join` yields [`DataError::Cancelled`].
    pub fn abort(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the task to finish.
    pub async fn join(self) -> Result<T, DataError> {
        match self.handle.await {
            Ok(output) => Ok(output),
            Err(e) if e.is_cancelled() => Err(DataError::Cancelled),
            Err(e) => Err(DataError::data_access(self.failure, e)),
        }
    }
}

/// Fetch the full station index off the caller's task.
pub(crate) async fn fetch_station_index(
    source: &Arc<dyn RemoteStationSource>,
    failure: &'static str,
) -> Result<Vec<RawStation>, DataError> {
    let source = Arc::clone(source);
    dispatch(failure, async move { source.fetch_station_index().await })
        .join()
        .await?
        .map_err(|e| DataError::from_remote(failure, e))
}
