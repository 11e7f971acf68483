use async_trait::async_trait;
use axum::Router;

/// Context provided to modules during initialization
pub struct InitCtx<'a> {
    pub settings: &'a crate::settings::Settings,
}

/// Migration definition contributed by a module. Migrations are collected
/// and logged at bootstrap; no database is wired in this deployment, so
/// they document the persistence target rather than execute against one.
#[derive(Debug, Clone)]
pub struct Migration {
    pub id: &'static str,
    pub up: &'static str,
}

/// Core module trait that all Folio modules implement
#[async_trait]
pub trait Module: Sync + Send {
    /// Unique name for this module
    fn name(&self) -> &'static str;

    /// Initialize the module with the provided context.
    /// Called during application startup before the server binds.
    async fn init(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Return the Axum router for this module's routes.
    /// Modules own their full paths; routers are merged at the root.
    fn routes(&self) -> Router {
        Router::new()
    }

    /// Return an OpenAPI fragment for this module as JSON.
    /// Fragments are merged into a single document by the HTTP layer.
    fn openapi(&self) -> Option<serde_json::Value> {
        None
    }

    /// Return migrations contributed by this module
    fn migrations(&self) -> Vec<Migration> {
        vec![]
    }

    /// Start background tasks for this module
    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Stop the module and clean up resources.
    /// Called during application shutdown.
    async fn stop(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
