use std::collections::BTreeMap;

use storefront_core::Isbn;

use crate::book::Book;

/// Catalog capability: resolve an ISBN to the live catalog entry.
///
/// The handle is mutable so fulfillment can deplete stock in place.
pub trait BookCatalog {
    fn find_by_isbn(&mut self, isbn: &Isbn) -> Option<&mut Book>;
}

/// In-memory catalog keyed by ISBN.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookCatalog {
    books: BTreeMap<Isbn, Book>,
}

impl InMemoryBookCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed (or replace) the entry for the book's ISBN.
    pub fn add_book(&mut self, book: Book) {
        self.books.insert(book.isbn().clone(), book);
    }

    /// Read-only lookup, for post-purchase inspection.
    pub fn book(&self, isbn: &Isbn) -> Option<&Book> {
        self.books.get(isbn)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl BookCatalog for InMemoryBookCatalog {
    fn find_by_isbn(&mut self, isbn: &Isbn) -> Option<&mut Book> {
        self.books.get_mut(isbn)
    }
}
