//! Deadline enforcement for a single attempt.

use std::future::Future;
use std::time::Duration;

use crate::counter::FetchError;

/// Run `fut` with a deadline; expiry becomes [`FetchError::Timeout`].
pub async fn with_timeout<T, F>(limit: Duration, fut: F) -> Result<T, FetchError>
where
    F: Future<Output = Result<T, FetchError>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(FetchError::Timeout(limit)),
    }
}
