pub mod models;

use std::sync::Arc;

use async_trait::async_trait;
use folio_kernel::{InitCtx, Migration, Module};
use serde_json::json;

/// Todos module: a persistence schema stub with no routes or behavior.
///
/// It contributes the relational shape of [`models::TodoRecord`] through
/// migrations and the OpenAPI document so the eventual implementation has
/// a declared target.
pub struct TodosModule;

impl TodosModule {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Module for TodosModule {
    fn name(&self) -> &'static str {
        "todos"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "todos module initialized (schema only)"
        );
        Ok(())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "components": {
                "schemas": {
                    "TodoRecord": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "integer" },
                            "title": { "type": "string" },
                            "description": { "type": "string" },
                            "priority": { "type": "integer" },
                            "complete": { "type": "boolean", "default": false }
                        },
                        "required": ["id", "title", "description", "priority"]
                    }
                }
            }
        }))
    }

    fn migrations(&self) -> Vec<Migration> {
        vec![Migration {
            id: "001_init",
            up: r#"
                CREATE TABLE IF NOT EXISTS todos (
                    id          INTEGER PRIMARY KEY,
                    title       TEXT    NOT NULL,
                    description TEXT    NOT NULL,
                    priority    INTEGER NOT NULL,
                    complete    BOOLEAN NOT NULL DEFAULT FALSE
                );
                "#,
        }]
    }
}

/// Create a new instance of the todos module
pub fn create_module() -> Arc<dyn Module> {
    Arc::new(TodosModule::new())
}
