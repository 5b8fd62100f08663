use tokio::sync::broadcast;

/// Shutdown trigger owned by the server lifecycle.
///
/// Long-running tasks subscribe through a [`ShutdownGuard`] before the
/// trigger can fire; triggering is idempotent and never blocks.
#[derive(Clone)]
pub struct ShutdownCoordinator {
    shutdown_tx: broadcast::Sender<()>,
}

impl ShutdownCoordinator {
    /// Create a new shutdown coordinator
    pub fn new() -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);
        Self { shutdown_tx }
    }

    /// Create a guard that resolves when shutdown is triggered
    pub fn subscribe_guard(&self) -> ShutdownGuard {
        ShutdownGuard {
            shutdown_rx: self.shutdown_tx.subscribe(),
        }
    }

    /// Trigger shutdown; every outstanding guard resolves
    pub fn trigger(&self) {
        // Send only fails when no guard is listening, which is fine.
        let _ = self.shutdown_tx.send(());
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiver half handed to tasks that must stop on shutdown
pub struct ShutdownGuard {
    shutdown_rx: broadcast::Receiver<()>,
}

impl ShutdownGuard {
    /// Wait for the shutdown signal
    pub async fn wait(mut self) {
        let _ = self.shutdown_rx.recv().await;
    }
}
