//! Server lifecycle management.
//!
//! The [`Server`] owns the listening socket, the serve task, and the
//! shutdown channel. Its state only ever moves forward:
//! `NotStarted → Running → Draining → Stopped`. All transitions happen
//! through `&mut self` on the single owner, so they are observed as a
//! strict sequence.

use crate::error::{Result as ServerResult, ServerError};
use crate::shutdown::ShutdownCoordinator;

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use log::{error, info, warn};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// How long [`Server::shutdown`] waits for in-flight requests before
/// aborting whatever is left.
pub const DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Lifecycle states, in the only order they can occur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    NotStarted,
    Running,
    Draining,
    Stopped,
}

/// What happened during the drain phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrainOutcome {
    /// All in-flight requests finished before the deadline
    Completed,
    /// The deadline passed and remaining connections were aborted
    DeadlineExceeded,
}

/// Owns the serve task and drives it through the lifecycle states
pub struct Server {
    bind_addr: String,
    state: ServerState,
    shutdown: ShutdownCoordinator,
    handle: Option<JoinHandle<std::io::Result<()>>>,
    local_addr: Option<SocketAddr>,
}

impl Server {
    /// Create a server that will bind to `bind_addr` when started
    pub fn new(bind_addr: impl Into<String>) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            state: ServerState::NotStarted,
            shutdown: ShutdownCoordinator::new(),
            handle: None,
            local_addr: None,
        }
    }

    /// Bind the listener and serve `app` on a background task.
    ///
    /// Returns the bound address, which matters when the configured port
    /// is 0 (OS-assigned). Bind failure is fatal to the caller: it is
    /// logged here and returned as [`ServerError::Bind`].
    pub async fn start(&mut self, app: Router) -> ServerResult<SocketAddr> {
        if self.state != ServerState::NotStarted {
            return Err(ServerError::InvalidState {
                expected: "NotStarted",
                actual: format!("{:?}", self.state),
            });
        }

        let listener = TcpListener::bind(&self.bind_addr).await.map_err(|e| {
            error!("Failed to bind {}: {}", self.bind_addr, e);
            ServerError::Bind {
                addr: self.bind_addr.clone(),
                source: e,
            }
        })?;

        let local_addr = listener.local_addr().map_err(|e| ServerError::Bind {
            addr: self.bind_addr.clone(),
            source: e,
        })?;

        // The serve task stops accepting connections and drains once the
        // guard resolves; the handle is joined in shutdown().
        let guard = self.shutdown.subscribe_guard();
        let handle = tokio::spawn(
            axum::serve(listener, app)
                .with_graceful_shutdown(guard.wait())
                .into_future(),
        );

        self.handle = Some(handle);
        self.local_addr = Some(local_addr);
        self.state = ServerState::Running;
        info!("Server listening on {}", local_addr);

        Ok(local_addr)
    }

    /// Stop accepting connections, drain in-flight requests, and stop.
    ///
    /// Waits up to `deadline` for the serve task to finish on its own;
    /// whatever is still running afterwards is aborted. Serve-task errors
    /// during the drain are logged, never propagated - shutdown always
    /// reaches `Stopped`.
    pub async fn shutdown(&mut self, deadline: Duration) -> DrainOutcome {
        if self.state != ServerState::Running {
            warn!(
                "Shutdown requested in state {:?}, nothing to drain",
                self.state
            );
            return DrainOutcome::Completed;
        }

        self.state = ServerState::Draining;
        info!("Draining: no longer accepting new connections");
        self.shutdown.trigger();

        // handle is always Some while Running
        let Some(mut handle) = self.handle.take() else {
            self.state = ServerState::Stopped;
            return DrainOutcome::Completed;
        };

        let outcome = match tokio::time::timeout(deadline, &mut handle).await {
            Ok(Ok(Ok(()))) => {
                info!("All in-flight requests completed");
                DrainOutcome::Completed
            }
            Ok(Ok(Err(e))) => {
                error!("Serve task ended with an I/O error during drain: {}", e);
                DrainOutcome::Completed
            }
            Ok(Err(e)) => {
                error!("Serve task failed during drain: {}", e);
                DrainOutcome::Completed
            }
            Err(_) => {
                warn!(
                    "Drain deadline of {:?} exceeded, aborting remaining connections",
                    deadline
                );
                handle.abort();
                if let Err(e) = handle.await
                    && !e.is_cancelled()
                {
                    error!("Aborted serve task reported: {}", e);
                }
                DrainOutcome::DeadlineExceeded
            }
        };

        self.state = ServerState::Stopped;
        info!("Server stopped");

        outcome
    }

    /// Current lifecycle state
    pub fn state(&self) -> ServerState {
        self.state
    }

    /// Address actually bound, once running
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.local_addr
    }
}

/// Block until SIGINT (Ctrl+C) or SIGTERM is received.
///
/// These signals are the only way the server leaves `Running`; the main
/// task parks here while the serve task handles requests.
pub async fn wait_for_shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT, initiating graceful shutdown"),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown"),
    }
}
