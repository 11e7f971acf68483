use std::sync::{Mutex, MutexGuard, PoisonError};

use super::models::{Book, BookPayload};

/// In-memory catalog store shared across request handlers.
///
/// Owns the record collection and the id counter behind a single mutex,
/// so every operation is atomic with respect to concurrent requests.
/// Ids are assigned from a monotonically increasing counter and are never
/// reused, so every id matches exactly zero or one record.
pub struct BookStore {
    inner: Mutex<Inner>,
}

struct Inner {
    books: Vec<Book>,
    next_id: i64,
}

impl BookStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                books: Vec::new(),
                next_id: 1,
            }),
        }
    }

    // Every mutation completes before the guard drops, so a poisoned
    // lock never holds a torn collection; recover instead of panicking.
    fn locked(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Load the demo catalog and advance the id counter past it.
    pub fn seed_demo(&self) {
        let seed = [
            (1, "Title One", "Author One", "science", 2012),
            (2, "Title two", "Author two", "math", 2013),
            (3, "Title three", "Author three", "english", 2014),
            (4, "Title four", "Author four", "computer science", 2015),
            (5, "Title five", "Author five", "social", 2016),
        ];

        let mut inner = self.locked();
        for (id, title, author, description, year) in seed {
            inner.books.push(Book {
                id,
                title: title.to_string(),
                author: author.to_string(),
                description: description.to_string(),
                rating: 4,
                published_date: year,
            });
        }
        inner.next_id = inner.books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        self.locked().books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locked().books.is_empty()
    }

    /// Full snapshot in insertion order
    pub fn list(&self) -> Vec<Book> {
        self.locked().books.clone()
    }

    /// Append a new record built from the payload, assigning a fresh id.
    /// Any id carried by the payload is discarded. Returns the full
    /// updated snapshot.
    pub fn create(&self, payload: &BookPayload) -> Vec<Book> {
        let mut inner = self.locked();
        let id = inner.next_id;
        inner.next_id += 1;
        debug_assert!(
            inner.books.iter().all(|b| b.id != id),
            "assigned id already present in catalog"
        );
        inner.books.push(Book::from_payload(id, payload));
        inner.books.clone()
    }

    /// Look up a single record by id
    pub fn get(&self, id: i64) -> Option<Book> {
        self.locked().books.iter().find(|b| b.id == id).cloned()
    }

    /// All records with the given rating, possibly empty
    pub fn by_rating(&self, rating: i32) -> Vec<Book> {
        self.locked()
            .books
            .iter()
            .filter(|b| b.rating == rating)
            .cloned()
            .collect()
    }

    /// All records published in the given year, possibly empty
    pub fn by_year(&self, year: i32) -> Vec<Book> {
        self.locked()
            .books
            .iter()
            .filter(|b| b.published_date == year)
            .cloned()
            .collect()
    }

    /// Replace the record with the given id by a domain record rebuilt
    /// from the payload. Returns the updated snapshot, or `None` when no
    /// record matches (the collection is left untouched).
    pub fn update(&self, id: i64, payload: &BookPayload) -> Option<Vec<Book>> {
        let mut inner = self.locked();
        let slot = inner.books.iter_mut().find(|b| b.id == id)?;
        *slot = Book::from_payload(id, payload);
        Some(inner.books.clone())
    }

    /// Remove the record with the given id. Missing ids are a silent
    /// no-op. Returns the updated snapshot either way.
    pub fn delete(&self, id: i64) -> Vec<Book> {
        let mut inner = self.locked();
        if let Some(pos) = inner.books.iter().position(|b| b.id == id) {
            inner.books.remove(pos);
        }
        inner.books.clone()
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}
