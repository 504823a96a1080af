//! Librarian – an in-memory library lending catalog.
//!
//! Librarian centers on three constructs and the registry that owns them:
//! * A [`catalog::Title`] is the abstract work, identified by value as a
//!   `(name, author, year)` triplet.
//! * A [`catalog::Book`] is one physical copy of a title, identified by a
//!   [`catalog::BookId`] the library assigns once and never reuses.
//! * A [`catalog::Lending`] is a receipt binding one copy to one
//!   [`catalog::User`] from a lent-at time until an optional returned-at
//!   time; a lending with no return time is active.
//!
//! Titles are interned by a keeper structure (see the `catalog` module)
//! enabling canonical sharing through `Arc`, so every copy of the same
//! work points at one title.
//!
//! ## Modules
//! * [`catalog`] – Fundamental constructs (titles, books, lendings, users)
//!   and the title keeper.
//! * [`library`] – The [`library::Library`] registry: the system of record
//!   and the sole mutator of book and lending state, plus the
//!   [`library::TitleOverview`] read projection.
//! * [`query`] – A lazily evaluated, composable filter pipeline over the
//!   library's book collection.
//! * [`error`] – The [`error::LibrarianError`] taxonomy and `Result` alias.
//! * [`sampledata`] – A constant table of seed titles with a callback
//!   style generator.
//!
//! ## Quick Start
//! ```
//! use librarian::library::Library;
//! use librarian::catalog::User;
//!
//! let mut library = Library::new();
//! let id = library.add_book("Emma", "Jane Austen", 1994).unwrap().id();
//! let alicja = User::new("Alicja");
//! library.lend_book(id, &alicja).unwrap();
//! let results = library.search().by_author("austen").execute();
//! assert_eq!(results.len(), 1);
//! library.return_book(id).unwrap();
//! ```
//!
//! ## Concurrency
//! A library is a single-owner, in-memory registry. All transitions take
//! `&mut self` and queries borrow the collection immutably, so the borrow
//! checker rules out mutation during query execution; callers that share a
//! library across threads wrap it in their own lock.

pub mod catalog;
pub mod error;
pub mod library;
pub mod query;
pub mod sampledata;
