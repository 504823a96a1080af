// a composable filter pipeline over the book collection

use std::collections::HashMap;

use crate::catalog::{Book, BookId, BookIdHasher};

type BookPredicate<'a> = Box<dyn Fn(&Book) -> bool + 'a>;

/// A query is started with [`crate::library::Library::search`] and holds a
/// snapshot reference to the live book collection. Filters conjoin into a
/// single predicate and every filter method returns a fresh query value,
/// so partially built pipelines can be kept around without aliasing the
/// collection. The actual search only happens in [`Query::execute`].
///
/// Result order is the backing map's iteration order, which is repeatable
/// for a fixed set of books since the map hashes with a fixed seed.
pub struct Query<'a> {
    books: &'a HashMap<BookId, Book, BookIdHasher>,
    predicate: Option<BookPredicate<'a>>,
}

impl<'a> Query<'a> {
    pub(crate) fn new(books: &'a HashMap<BookId, Book, BookIdHasher>) -> Self {
        Self {
            books,
            predicate: None,
        }
    }

    /// Conjoins an arbitrary predicate over books.
    pub fn by(self, predicate: impl Fn(&Book) -> bool + 'a) -> Self {
        let combined: BookPredicate<'a> = match self.predicate {
            Some(kept) => Box::new(move |book| kept(book) && predicate(book)),
            None => Box::new(predicate),
        };
        Self {
            books: self.books,
            predicate: Some(combined),
        }
    }

    /// Case-insensitive substring match on the author.
    pub fn by_author(self, author: &str) -> Self {
        let fragment = author.to_lowercase();
        self.by(move |book| book.author().to_lowercase().contains(&fragment))
    }

    /// Case-insensitive substring match on the title name.
    pub fn by_title(self, title: &str) -> Self {
        let fragment = title.to_lowercase();
        self.by(move |book| book.name().to_lowercase().contains(&fragment))
    }

    /// Exact match on the publication year.
    pub fn by_year(self, year: i32) -> Self {
        self.by(move |book| book.year() == year)
    }

    /// Matches books whose availability equals the given flag.
    pub fn by_availability(self, available: bool) -> Self {
        self.by(move |book| book.is_available() == available)
    }

    /// Runs the accumulated predicate against the captured collection.
    /// Can be called again and re-evaluates against the same collection.
    pub fn execute(&self) -> Vec<&'a Book> {
        let mut result = Vec::new();
        for book in self.books.values() {
            let keep = match &self.predicate {
                Some(predicate) => predicate(book),
                None => true,
            };
            if keep {
                result.push(book);
            }
        }
        result
    }
}
