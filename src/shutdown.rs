//! Termination signal handling.
use log::*;
use tokio_util::sync::CancellationToken;

use crate::Result;

/// Cancel `token` when the process receives SIGTERM or SIGINT.
///
/// Handlers are registered before this returns so a signal arriving
/// mid-run is never missed.
#[cfg(unix)]
pub fn install_signal_handlers(token: CancellationToken) -> Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    tokio::spawn(async move {
        tokio::select! {
            _ = sigterm.recv() => warn!("received SIGTERM"),
            _ = sigint.recv() => warn!("received SIGINT"),
        }
        token.cancel();
    });

    Ok(())
}

#[cfg(not(unix))]
pub fn install_signal_handlers(token: CancellationToken) -> Result<()> {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("received Ctrl+C");
            token.cancel();
        }
    });

    Ok(())
}
