use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use garde::Validate;
use serde::Deserialize;
use serde_json::json;

use folio_http::error::AppError;

use super::models::{Book, BookPayload};
use super::store::BookStore;

/// Build the catalog router over a shared store
pub fn router(store: Arc<BookStore>) -> Router {
    Router::new()
        .route("/books", get(list_books))
        .route("/books/", get(books_by_rating))
        .route("/books/publish/", get(books_by_year))
        .route("/books/update_book", put(update_book))
        .route("/create_book", post(create_book))
        .route("/books/{book_id}", get(read_book).delete(delete_book))
        .with_state(store)
}

/// Map a garde report into the field-level validation error format
fn validation_error(report: garde::Report) -> AppError {
    let details = report
        .iter()
        .map(|(path, error)| json!({"field": path.to_string(), "error": error.to_string()}))
        .collect();
    AppError::validation(details, "book payload failed validation")
}

fn invalid_param(field: &str, reason: &str) -> AppError {
    AppError::validation(
        vec![json!({"field": field, "error": reason})],
        "invalid request parameter",
    )
}

async fn list_books(State(store): State<Arc<BookStore>>) -> Json<Vec<Book>> {
    Json(store.list())
}

async fn create_book(
    State(store): State<Arc<BookStore>>,
    Json(payload): Json<BookPayload>,
) -> Result<Json<Vec<Book>>, AppError> {
    payload.validate().map_err(validation_error)?;
    Ok(Json(store.create(&payload)))
}

async fn read_book(
    State(store): State<Arc<BookStore>>,
    Path(book_id): Path<i64>,
) -> Result<Json<Book>, AppError> {
    if book_id <= 0 {
        return Err(invalid_param("book_id", "must be greater than 0"));
    }
    store
        .get(book_id)
        .map(Json)
        .ok_or_else(|| AppError::not_found("Book not found"))
}

#[derive(Debug, Deserialize)]
struct RatingQuery {
    rating: i32,
}

async fn books_by_rating(
    State(store): State<Arc<BookStore>>,
    query: Result<Query<RatingQuery>, QueryRejection>,
) -> Result<Json<Vec<Book>>, AppError> {
    let Query(query) = query.map_err(|e| AppError::bad_request(e.body_text()))?;
    if !(1..=5).contains(&query.rating) {
        return Err(invalid_param("rating", "must be between 1 and 5"));
    }
    Ok(Json(store.by_rating(query.rating)))
}

#[derive(Debug, Deserialize)]
struct YearQuery {
    year: i32,
}

async fn books_by_year(
    State(store): State<Arc<BookStore>>,
    query: Result<Query<YearQuery>, QueryRejection>,
) -> Result<Json<Vec<Book>>, AppError> {
    let Query(query) = query.map_err(|e| AppError::bad_request(e.body_text()))?;
    Ok(Json(store.by_year(query.year)))
}

async fn update_book(
    State(store): State<Arc<BookStore>>,
    Json(payload): Json<BookPayload>,
) -> Result<(StatusCode, Json<Vec<Book>>), AppError> {
    payload.validate().map_err(validation_error)?;
    let id = payload
        .id
        .filter(|id| *id > 0)
        .ok_or_else(|| invalid_param("id", "a positive id is required for update"))?;

    match store.update(id, &payload) {
        Some(books) => Ok((StatusCode::CREATED, Json(books))),
        None => Err(AppError::not_found("Item not found")),
    }
}

async fn delete_book(
    State(store): State<Arc<BookStore>>,
    Path(book_id): Path<i64>,
) -> Result<Json<Vec<Book>>, AppError> {
    if book_id <= 0 {
        return Err(invalid_param("book_id", "must be greater than 0"));
    }
    Ok(Json(store.delete(book_id)))
}
