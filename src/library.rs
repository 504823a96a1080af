// the library registry: sole owner and mutator of books, lendings and titles

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use chrono::Utc;
use tracing::debug;

use crate::catalog::{
    Book, BookId, BookIdGenerator, BookIdHasher, Lending, LendingId, Title, TitleKeeper, User,
};
use crate::error::{LibrarianError, Result};
use crate::query::Query;

// ------------- Library -------------
// This sets up the registry with the necessary structures. Active lendings
// are indexed twice, once in the current lendings map and once in the
// lending slot of the book itself, and the two views must never diverge.
// Every transition below checks its preconditions before touching any of
// the owned collections, so a failed call leaves the state untouched.
#[derive(Debug)]
pub struct Library {
    // all books, available and lent, keyed by their assigned id
    books: HashMap<BookId, Book, BookIdHasher>,
    // only the books currently lent, pointing into the lending history
    current_lendings: HashMap<BookId, LendingId, BookIdHasher>,
    // catalog of every title ever added
    catalog: TitleKeeper,
    // every lending ever made, append only, in creation order
    lending_history: Vec<Lending>,
    // owns the id generator, so independent libraries number independently
    book_id_generator: BookIdGenerator,
}

impl Library {
    pub fn new() -> Self {
        Self {
            books: HashMap::default(),
            current_lendings: HashMap::default(),
            catalog: TitleKeeper::new(),
            lending_history: Vec::new(),
            book_id_generator: BookIdGenerator::new(),
        }
    }

    /// Adds a new physical copy, interning its title in the catalog on
    /// first sight, and returns the stored book. Fails only when the
    /// title itself is invalid.
    pub fn add_book(&mut self, name: &str, author: &str, year: i32) -> Result<&Book> {
        let (title, previously_kept) = self.catalog.keep(Title::new(name, author, year)?);
        let id = self.book_id_generator.generate();
        debug!(id, %title, new_title = !previously_kept, "adding book");
        match self.books.entry(id) {
            Entry::Vacant(entry) => Ok(entry.insert(Book::new(id, title))),
            Entry::Occupied(_) => Err(LibrarianError::Invariant(format!(
                "book id {id} was assigned twice"
            ))),
        }
    }

    /// Removes an available copy. The catalog and the lending history are
    /// left alone, so the title keeps showing up in overviews.
    pub fn remove_book(&mut self, book_id: BookId) -> Result<()> {
        self.assert_book_exists(book_id)?;
        if self.current_lendings.contains_key(&book_id) {
            return Err(LibrarianError::StillLent(book_id));
        }
        self.books.remove(&book_id);
        debug!(book_id, "removed book");
        Ok(())
    }

    pub fn book(&self, book_id: BookId) -> Option<&Book> {
        self.books.get(&book_id)
    }

    pub fn contains_book(&self, book_id: BookId) -> bool {
        self.books.contains_key(&book_id)
    }

    pub fn total_books(&self) -> usize {
        self.books.len()
    }

    /// The lendings that have not been returned yet.
    pub fn current_lendings(&self) -> Vec<&Lending> {
        self.current_lendings
            .values()
            .filter_map(|lending_id| self.lending_history.get(*lending_id))
            .collect()
    }

    /// Every lending ever made, active and finished, in creation order.
    pub fn lending_history(&self) -> &[Lending] {
        &self.lending_history
    }

    /// Lends an available copy to a user and returns the receipt. This is
    /// the only place lendings come into existence.
    pub fn lend_book(&mut self, book_id: BookId, user: &User) -> Result<&Lending> {
        self.assert_book_exists(book_id)?;
        if self.current_lendings.contains_key(&book_id) {
            return Err(LibrarianError::AlreadyLent(book_id));
        }
        let lending_id = self.lending_history.len();
        if let Some(book) = self.books.get_mut(&book_id) {
            book.set_lending(lending_id);
        }
        self.current_lendings.insert(book_id, lending_id);
        self.lending_history
            .push(Lending::new(lending_id, book_id, user.clone(), Utc::now()));
        debug!(book_id, lending_id, user = %user, "lent book");
        self.lending_history.last().ok_or_else(|| {
            LibrarianError::Invariant(String::from(
                "lending history empty right after a lending was recorded",
            ))
        })
    }

    /// Returns a lent copy. The receipt gets its return time and stays in
    /// the history, the book becomes available again.
    pub fn return_book(&mut self, book_id: BookId) -> Result<()> {
        self.assert_book_exists(book_id)?;
        let lending_id = match self.current_lendings.get(&book_id) {
            Some(lending_id) => *lending_id,
            None => return Err(LibrarianError::NotLent(book_id)),
        };
        let lending = self.lending_history.get_mut(lending_id).ok_or_else(|| {
            LibrarianError::Invariant(format!(
                "active lending {lending_id} missing from the history"
            ))
        })?;
        lending.finish(Utc::now());
        if let Some(book) = self.books.get_mut(&book_id) {
            book.clear_lending();
        }
        self.current_lendings.remove(&book_id);
        debug!(book_id, lending_id, "returned book");
        Ok(())
    }

    /// A point-in-time projection for one title: its copies and the active
    /// lendings of those copies. An unknown title yields zero counts.
    pub fn title_overview<'s>(&'s self, title: &'s Title) -> TitleOverview<'s> {
        let books = self
            .books
            .values()
            .filter(|book| book.title().as_ref() == title)
            .collect();
        let current_lendings = self
            .current_lendings
            .values()
            .filter_map(|lending_id| self.lending_history.get(*lending_id))
            .filter(|lending| {
                self.books
                    .get(&lending.book())
                    .is_some_and(|book| book.title().as_ref() == title)
            })
            .collect();
        TitleOverview {
            title,
            books,
            current_lendings,
        }
    }

    /// One overview per catalog title. A title whose copies have all been
    /// removed still appears, with zero total and available copies.
    pub fn list_all_titles(&self) -> Vec<TitleOverview<'_>> {
        self.catalog
            .iter()
            .map(|title| self.title_overview(title.as_ref()))
            .collect()
    }

    /// Starts a query over the live book collection. Filters accumulate on
    /// the returned [`Query`] and nothing is evaluated until
    /// [`Query::execute`] is called.
    pub fn search(&self) -> Query<'_> {
        Query::new(&self.books)
    }

    fn assert_book_exists(&self, book_id: BookId) -> Result<()> {
        if self.books.contains_key(&book_id) {
            Ok(())
        } else {
            Err(LibrarianError::NotFound(book_id))
        }
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

// ------------- TitleOverview -------------
// Derived view over one title at one moment, holding no state of its own.
// By construction each active lending corresponds to exactly one distinct
// book in the subset, so available = total - lendings.
#[derive(Debug)]
pub struct TitleOverview<'a> {
    title: &'a Title,
    books: Vec<&'a Book>,
    current_lendings: Vec<&'a Lending>,
}

impl<'a> TitleOverview<'a> {
    pub fn title(&self) -> &'a Title {
        self.title
    }
    pub fn books(&self) -> &[&'a Book] {
        &self.books
    }
    pub fn current_lendings(&self) -> &[&'a Lending] {
        &self.current_lendings
    }
    pub fn total_copies(&self) -> usize {
        self.books.len()
    }
    pub fn available_copies(&self) -> usize {
        self.total_copies() - self.current_lendings.len()
    }
    pub fn available_books(&self) -> Vec<&'a Book> {
        self.books
            .iter()
            .filter(|book| book.is_available())
            .copied()
            .collect()
    }
}

impl fmt::Display for TitleOverview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut available = String::new();
        for book in &self.books {
            if book.is_available() {
                available += &(book.id().to_string() + ", ");
            }
        }
        available.truncate(available.len().saturating_sub(2));
        let mut lendings = String::new();
        for lending in &self.current_lendings {
            lendings += &format!("{{bookId={} -> {}}}, ", lending.book(), lending.user());
        }
        lendings.truncate(lendings.len().saturating_sub(2));
        write!(
            f,
            "TitleOverview {{{}, numberOfCopies={}, availableCopies(bookId)={}, lendings={}}}",
            self.title,
            self.total_copies(),
            if available.is_empty() {
                String::from("none")
            } else {
                format!("[{available}]")
            },
            if lendings.is_empty() {
                String::from("none")
            } else {
                format!("[{lendings}]")
            }
        )
    }
}
