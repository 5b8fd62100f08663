use sr_config::ValidationConfig;

/// Shared state injected into request handlers.
///
/// Everything in here is read-only after startup, so handlers may clone
/// and read it concurrently without synchronization.
#[derive(Clone)]
pub struct AppState {
    pub validation: ValidationConfig,
}
