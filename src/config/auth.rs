//! Device authentication configuration

use serde::{Deserialize, Serialize};

/// Shared-secret configuration for the ingest endpoint.
///
/// There is deliberately no default token: an unset token rejects every
/// ingest rather than accepting unauthenticated writes.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AuthConfig {
    /// Bearer token devices must present on `POST /ingest`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_token: Option<String>,
}

impl AuthConfig {
    /// Check an `Authorization` header value against the configured token.
    ///
    /// Returns false when no token is configured.
    pub fn accepts(&self, authorization: Option<&str>) -> bool {
        match (&self.device_token, authorization) {
            (Some(token), Some(header)) => header == format!("Bearer {}", token),
            _ => false,
        }
    }
}
