//! End-to-end tests against the fully assembled router.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use folio_app::modules;
use folio_kernel::settings::Settings;
use folio_kernel::{InitCtx, ModuleRegistry};

async fn app() -> axum::Router {
    let settings = Settings::default();
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry);

    let ctx = InitCtx {
        settings: &settings,
    };
    registry.init_modules(&ctx).await.unwrap();

    folio_http::build_router(&registry, &settings)
}

#[tokio::test]
async fn healthz_responds_ok() {
    let response = app()
        .await
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn catalog_routes_are_mounted_at_root() {
    let response = app()
        .await
        .oneshot(Request::builder().uri("/books").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let books: Vec<serde_json::Value> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(books.len(), 5);
}

#[tokio::test]
async fn merged_openapi_document_is_served() {
    let response = app()
        .await
        .oneshot(
            Request::builder()
                .uri("/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let spec: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    let paths = spec["paths"].as_object().unwrap();
    assert!(paths.contains_key("/healthz"));
    assert!(paths.contains_key("/books"));
    assert!(paths.contains_key("/create_book"));
    // Schemas from both modules end up in one document.
    assert!(spec["components"]["schemas"]["Book"].is_object());
    assert!(spec["components"]["schemas"]["TodoRecord"].is_object());
    assert!(spec["components"]["schemas"]["ErrorResponse"].is_object());
}

#[tokio::test]
async fn unknown_route_is_404() {
    let response = app()
        .await
        .oneshot(Request::builder().uri("/todos").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
