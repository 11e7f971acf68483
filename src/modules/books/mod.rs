pub mod models;
pub mod routes;
pub mod store;

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use folio_kernel::{InitCtx, Module};
use serde_json::json;

use store::BookStore;

/// Book catalog module: an in-memory CRUD service over [`store::BookStore`].
pub struct BooksModule {
    store: Arc<BookStore>,
}

impl BooksModule {
    pub fn new() -> Self {
        Self {
            store: Arc::new(BookStore::new()),
        }
    }
}

impl Default for BooksModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        if ctx.settings.catalog.seed && self.store.is_empty() {
            self.store.seed_demo();
        }

        tracing::info!(
            module = self.name(),
            books = self.store.len(),
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.store.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let book_response = json!({
            "description": "Current catalog snapshot",
            "content": {
                "application/json": {
                    "schema": {
                        "type": "array",
                        "items": { "$ref": "#/components/schemas/Book" }
                    }
                }
            }
        });
        let not_found = json!({
            "description": "No record with the given id",
            "content": {
                "application/json": {
                    "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                }
            }
        });
        let invalid = json!({
            "description": "Validation error",
            "content": {
                "application/json": {
                    "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                }
            }
        });

        Some(json!({
            "paths": {
                "/books": {
                    "get": {
                        "summary": "List all books",
                        "tags": ["Books"],
                        "responses": { "200": book_response.clone() }
                    }
                },
                "/create_book": {
                    "post": {
                        "summary": "Create a book",
                        "description": "Any client-supplied id is ignored; the catalog assigns the next id.",
                        "tags": ["Books"],
                        "requestBody": {
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/BookPayload" }
                                }
                            },
                            "required": true
                        },
                        "responses": { "200": book_response.clone(), "422": invalid.clone() }
                    }
                },
                "/books/{book_id}": {
                    "get": {
                        "summary": "Read a book by id",
                        "tags": ["Books"],
                        "parameters": [{
                            "name": "book_id",
                            "in": "path",
                            "required": true,
                            "schema": { "type": "integer", "minimum": 1 }
                        }],
                        "responses": {
                            "200": {
                                "description": "The matching record",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/Book" }
                                    }
                                }
                            },
                            "404": not_found.clone(),
                            "422": invalid.clone()
                        }
                    },
                    "delete": {
                        "summary": "Delete a book by id",
                        "description": "Deleting a missing id is a no-op.",
                        "tags": ["Books"],
                        "parameters": [{
                            "name": "book_id",
                            "in": "path",
                            "required": true,
                            "schema": { "type": "integer", "minimum": 1 }
                        }],
                        "responses": { "200": book_response.clone(), "422": invalid.clone() }
                    }
                },
                "/books/": {
                    "get": {
                        "summary": "Filter books by rating",
                        "tags": ["Books"],
                        "parameters": [{
                            "name": "rating",
                            "in": "query",
                            "required": true,
                            "schema": { "type": "integer", "minimum": 1, "maximum": 5 }
                        }],
                        "responses": { "200": book_response.clone(), "422": invalid.clone() }
                    }
                },
                "/books/publish/": {
                    "get": {
                        "summary": "Filter books by publish year",
                        "tags": ["Books"],
                        "parameters": [{
                            "name": "year",
                            "in": "query",
                            "required": true,
                            "schema": { "type": "integer" }
                        }],
                        "responses": { "200": book_response.clone() }
                    }
                },
                "/books/update_book": {
                    "put": {
                        "summary": "Update a book",
                        "description": "Replaces the record whose id matches the payload id.",
                        "tags": ["Books"],
                        "requestBody": {
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/BookPayload" }
                                }
                            },
                            "required": true
                        },
                        "responses": { "201": book_response.clone(), "404": not_found.clone(), "422": invalid.clone() }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Book": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "integer" },
                            "title": { "type": "string" },
                            "author": { "type": "string" },
                            "description": { "type": "string" },
                            "rating": { "type": "integer", "minimum": 1, "maximum": 5 },
                            "published_date": { "type": "integer" }
                        },
                        "required": ["id", "title", "author", "description", "rating", "published_date"]
                    },
                    "BookPayload": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "integer", "description": "Required for update, ignored on create" },
                            "title": { "type": "string", "minLength": 3 },
                            "author": { "type": "string", "minLength": 3 },
                            "description": { "type": "string", "maxLength": 100 },
                            "rating": { "type": "integer", "minimum": 1, "maximum": 5 },
                            "published_date": { "type": "integer", "minimum": 1001, "maximum": 2024 }
                        },
                        "required": ["title", "author", "description", "rating", "published_date"]
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module stopped");
        Ok(())
    }
}

/// Create a new instance of the books module
pub fn create_module() -> Arc<dyn Module> {
    Arc::new(BooksModule::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_kernel::settings::Settings;

    #[tokio::test]
    async fn init_seeds_demo_catalog_by_default() {
        let module = BooksModule::new();
        let settings = Settings::default();
        let ctx = InitCtx {
            settings: &settings,
        };

        module.init(&ctx).await.unwrap();
        assert_eq!(module.store.len(), 5);

        // Re-running init must not double the seed data.
        module.init(&ctx).await.unwrap();
        assert_eq!(module.store.len(), 5);
    }

    #[tokio::test]
    async fn init_honors_seed_opt_out() {
        let module = BooksModule::new();
        let mut settings = Settings::default();
        settings.catalog.seed = false;
        let ctx = InitCtx {
            settings: &settings,
        };

        module.init(&ctx).await.unwrap();
        assert!(module.store.is_empty());
    }

    #[test]
    fn openapi_fragment_covers_catalog_paths() {
        let module = BooksModule::new();
        let spec = module.openapi().unwrap();
        let paths = spec["paths"].as_object().unwrap();
        assert!(paths.contains_key("/books"));
        assert!(paths.contains_key("/create_book"));
        assert!(paths.contains_key("/books/update_book"));
        assert!(spec["components"]["schemas"]["Book"].is_object());
    }
}
