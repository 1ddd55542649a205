//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe that returns 200 OK with a fixed JSON record
//! whenever the process can respond to HTTP. Used by Kubernetes, ECS, systemd,
//! load balancers and CI smoke tests.

use axum::Json;
use serde::Serialize;

use crate::config::{HEALTH_STATUS_HEALTHY, SERVICE_NAME, SERVICE_VERSION};

/// Body of the `/health` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

impl HealthStatus {
    pub const fn healthy() -> Self {
        Self {
            status: HEALTH_STATUS_HEALTHY,
            service: SERVICE_NAME,
            version: SERVICE_VERSION,
        }
    }
}

/// Health check handler.
///
/// Consults no state, so the answer is identical for every call.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}
