//! Helper for running synchronous storage work off the async runtime.

use tokio::task::spawn_blocking;

use crate::ServiceError;

/// Run a blocking closure on the blocking pool and flatten the join error.
pub(crate) async fn run_blocking<T, E, F>(f: F) -> Result<T, ServiceError>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Into<ServiceError> + Send + 'static,
{
    spawn_blocking(f)
        .await
        .map_err(|e| {
            tracing::error!("Join error: {}", e);
            ServiceError::from(e)
        })?
        .map_err(Into::into)
}
