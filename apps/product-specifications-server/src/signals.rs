use anyhow::Result;
use tokio::signal;
use tracing::info;

/// Resolves on Ctrl+C or, on unix, SIGTERM.
pub async fn wait_for_shutdown() -> Result<()> {
    #[cfg(unix)]
    {
        let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())?;
        tokio::select! {
            res = signal::ctrl_c() => {
                res?;
                info!(signal = "ctrl_c", "Shutting down");
            }
            _ = sigterm.recv() => info!(signal = "sigterm", "Shutting down"),
        }
    }

    #[cfg(not(unix))]
    {
        signal::ctrl_c().await?;
        info!(signal = "ctrl_c", "Shutting down");
    }

    Ok(())
}
