//! Folio application library: the book catalog and todos modules.

pub mod modules;
