use garde::Validate;
use serde::{Deserialize, Serialize};

/// A book record held by the catalog store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier, assigned by the store
    pub id: i64,
    pub title: String,
    pub author: String,
    pub description: String,
    /// Reader rating, 1 through 5
    pub rating: i32,
    /// Year of publication
    pub published_date: i32,
}

impl Book {
    /// Rebuild a domain record from a validated payload. Any id carried by
    /// the payload is ignored in favor of the one passed in.
    pub fn from_payload(id: i64, payload: &BookPayload) -> Self {
        Self {
            id,
            title: payload.title.clone(),
            author: payload.author.clone(),
            description: payload.description.clone(),
            rating: payload.rating,
            published_date: payload.published_date,
        }
    }
}

/// Client payload for create and update requests.
///
/// `id` is optional: create ignores it entirely, update requires it to
/// locate the record being replaced.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookPayload {
    #[garde(skip)]
    pub id: Option<i64>,
    #[garde(length(min = 3))]
    pub title: String,
    #[garde(length(min = 3))]
    pub author: String,
    #[garde(length(max = 100))]
    pub description: String,
    #[garde(range(min = 1, max = 5))]
    pub rating: i32,
    /// Strictly between 1000 and 2025
    #[garde(range(min = 1001, max = 2024))]
    pub published_date: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> BookPayload {
        BookPayload {
            id: None,
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            description: "sci-fi".to_string(),
            rating: 5,
            published_date: 1965,
        }
    }

    #[test]
    fn valid_payload_passes() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn short_title_is_rejected() {
        let mut p = payload();
        p.title = "ab".to_string();
        let report = p.validate().unwrap_err();
        assert!(report.iter().any(|(path, _)| path.to_string() == "title"));
    }

    #[test]
    fn rating_out_of_range_is_rejected() {
        let mut p = payload();
        p.rating = 6;
        assert!(p.validate().is_err());
        p.rating = 0;
        assert!(p.validate().is_err());
    }

    #[test]
    fn published_date_bounds_are_exclusive() {
        let mut p = payload();
        p.published_date = 1000;
        assert!(p.validate().is_err());
        p.published_date = 2025;
        assert!(p.validate().is_err());
        p.published_date = 1001;
        assert!(p.validate().is_ok());
        p.published_date = 2024;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn from_payload_ignores_payload_id() {
        let mut p = payload();
        p.id = Some(42);
        let book = Book::from_payload(7, &p);
        assert_eq!(book.id, 7);
        assert_eq!(book.title, "Dune");
    }
}
