//! Identity providers

use async_trait::async_trait;
use workpace_core::performance::IdentityProvider;
use workpace_domain::{Result as DomainResult, Viewer};

/// Identity provider that always reports the same viewer.
///
/// For single-user deployments and for wiring one service per known viewer.
#[derive(Debug, Clone)]
pub struct StaticIdentityProvider {
    viewer: Viewer,
}

impl StaticIdentityProvider {
    pub fn new(viewer: Viewer) -> Self {
        Self { viewer }
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn current_viewer(&self) -> DomainResult<Viewer> {
        Ok(self.viewer.clone())
    }
}
