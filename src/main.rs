use std::net::SocketAddr;

use todo_service::{
    init_stdout_tracing, MetricsProviderGuard, Settings, StartupError, TracingProviderGuard,
};

use thiserror::Error;
use tokio::net::TcpListener;
#[cfg(unix)]
use tokio::signal;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
use tracing::info;

#[derive(Debug, Error)]
enum RoutingAppError {
    #[error("Startup error")]
    Startup(#[from] StartupError),

    #[error("Io error")]
    Io(#[from] std::io::Error),
}

fn main() -> Result<(), RoutingAppError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(num_cpus::get())
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

#[cfg(unix)]
async fn shutdown_signal() {
    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(sigterm) => sigterm,
        Err(e) => {
            tracing::error!(error = %e, "failed to bind to SIGTERM, waiting for SIGINT only");
            let _ = signal::ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("SIGINT received.");
        },
        _ = sigterm.recv() => {
            info!("SIGTERM received.");
        },
    }
}

async fn async_main() -> Result<(), RoutingAppError> {
    let settings = Settings::new()?;

    let _tracing_provider_guard = if settings.tracing_enabled() {
        Some(TracingProviderGuard::new(&settings)?)
    } else {
        init_stdout_tracing()?;
        None
    };

    let _metrics_provider_guard = settings
        .metrics_enabled()
        .then(|| MetricsProviderGuard::new(&settings))
        .transpose()?;

    info!("Starting Todo API server...");

    let server_addr = settings.server_addr();
    let (app, storage) = todo_service::init_app(settings).await?;

    let listener = TcpListener::bind(&server_addr).await?;
    info!(addr = %server_addr, "listening");

    let shutdown_signal = async {
        #[cfg(unix)]
        shutdown_signal().await;
        #[cfg(not(unix))]
        let _ = tokio::signal::ctrl_c().await;
    };

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal)
    .await?;

    storage.close().await;

    Ok(())
}
