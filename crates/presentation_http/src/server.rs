//! Server run loop with a bounded graceful shutdown

use std::{future::Future, future::IntoFuture, io, time::Duration};

use axum::Router;
use tokio::{net::TcpListener, sync::oneshot};
use tracing::{info, warn};

/// Serve `app` until `signal` resolves, then drain connections for at most `grace`
///
/// Connections still open when `grace` elapses are dropped.
///
/// # Errors
///
/// Returns an error if the server fails or its task panics.
pub async fn serve_until<F>(
    listener: TcpListener,
    app: Router,
    signal: F,
    grace: Duration,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (signalled_tx, signalled_rx) = oneshot::channel();

    let serve = axum::serve(listener, app).with_graceful_shutdown(async move {
        signal.await;
        let _ = signalled_tx.send(());
    });
    let mut server = tokio::spawn(serve.into_future());

    tokio::select! {
        joined = &mut server => return joined.map_err(io::Error::other)?,
        Ok(()) = signalled_rx => {},
    }

    info!("Waiting up to {:?} for connections to close...", grace);

    match tokio::time::timeout(grace, &mut server).await {
        Ok(joined) => joined.map_err(io::Error::other)?,
        Err(_) => {
            warn!("Shutdown grace period elapsed, dropping open connections");
            server.abort();
            Ok(())
        },
    }
}
