//! OS signal handling.

use crate::lifecycle::CancelToken;

/// Fire `token` on Ctrl+C. Returns once the signal arrived or the token fired.
pub async fn cancel_on_ctrl_c(token: CancelToken) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            match result {
                Ok(()) => token.cancel(),
                Err(e) => tracing::warn!(error = %e, "Failed to install Ctrl+C handler"),
            }
        }
        _ = token.cancelled() => {}
    }
}
