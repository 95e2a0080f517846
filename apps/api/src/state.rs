use crate::analysis::gateway::ModelGateway;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; nothing here is mutated per request.
#[derive(Clone)]
pub struct AppState {
    pub gateway: ModelGateway,
    pub config: Config,
}
