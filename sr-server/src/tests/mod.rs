mod api;

use crate::{AppState, build_router};

use axum_test::TestServer;

/// Spin up an in-process test server with default validation limits
pub(crate) fn test_server() -> TestServer {
    let state = AppState {
        validation: sr_config::ValidationConfig::default(),
    };
    TestServer::new(build_router(state)).unwrap()
}
