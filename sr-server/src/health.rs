/// GET /health - liveness probe
///
/// Fixed plain-text body, deliberately outside the JSON envelope so it
/// stays cheap for load balancers and uptime checks.
pub async fn health_check() -> &'static str {
    "healthy"
}
