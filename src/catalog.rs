// the constructs of the lending catalog and their keepers

use core::hash::BuildHasherDefault;
use std::collections::HashSet;
use std::collections::hash_set::Iter;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use seahash::SeaHasher;
use serde::Serialize;

use crate::error::{LibrarianError, Result};

// ------------- BookId -------------
pub type BookId = u64;

pub type BookIdHasher = BuildHasherDefault<SeaHasher>;
pub type OtherHasher = BuildHasherDefault<SeaHasher>;

pub const GENESIS: BookId = 0;

// Ids are handed out by the library alone, strictly increasing from 1.
// Removed books do not put their id back into circulation, so an id
// observed once refers to the same copy forever.
#[derive(Debug)]
pub struct BookIdGenerator {
    last_assigned: BookId,
}

impl BookIdGenerator {
    pub fn new() -> Self {
        Self {
            last_assigned: GENESIS,
        }
    }
    pub fn generate(&mut self) -> BookId {
        self.last_assigned += 1;
        self.last_assigned
    }
    pub fn current(&self) -> BookId {
        self.last_assigned
    }
}

impl Default for BookIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// ------------- Title -------------
// A title is the abstract work, shared by every physical copy of it.
// Equality and hashing are structural, so a (name, author, year) triplet
// can be used as a grouping key.
#[derive(PartialEq, Eq, Hash, Debug, Serialize)]
pub struct Title {
    name: String,
    author: String,
    year: i32,
}

impl Title {
    pub fn new(name: &str, author: &str, year: i32) -> Result<Self> {
        if name.is_empty() {
            return Err(LibrarianError::InvalidTitle(String::from(
                "name must not be empty",
            )));
        }
        if author.is_empty() {
            return Err(LibrarianError::InvalidTitle(String::from(
                "author must not be empty",
            )));
        }
        Ok(Self {
            name: String::from(name),
            author: String::from(author),
            year,
        })
    }
    // It's intentional to encapsulate the fields in the struct
    // and only expose them using "getters", because this yields
    // true immutability for objects after creation.
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn author(&self) -> &str {
        &self.author
    }
    pub fn year(&self) -> i32 {
        self.year
    }
}
impl Ord for Title {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.author, &self.name, self.year).cmp(&(&other.author, &other.name, other.year))
    }
}
impl PartialOrd for Title {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "'{}' by {} ({})", self.name, self.author, self.year)
    }
}

// The catalog of known titles. Titles are interned here so that every
// copy of the same work shares one Arc. Membership is never revoked,
// not even when the last copy of a title is removed.
#[derive(Debug)]
pub struct TitleKeeper {
    kept: HashSet<Arc<Title>, OtherHasher>,
}
impl TitleKeeper {
    pub fn new() -> Self {
        Self {
            kept: HashSet::default(),
        }
    }
    pub fn keep(&mut self, title: Title) -> (Arc<Title>, bool) {
        let keepsake = Arc::new(title);
        let previously_kept = !self.kept.insert(Arc::clone(&keepsake));
        (
            Arc::clone(self.kept.get(&keepsake).unwrap()),
            previously_kept,
        )
    }
    pub fn iter(&self) -> Iter<'_, Arc<Title>> {
        self.kept.iter()
    }
    pub fn len(&self) -> usize {
        self.kept.len()
    }
    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }
}

impl Default for TitleKeeper {
    fn default() -> Self {
        Self::new()
    }
}

// ------------- User -------------
// Minimal patron identity. No uniqueness is enforced and nothing in the
// library keys on users, so a name is all there is.
#[derive(PartialEq, Eq, Hash, Clone, Debug, Serialize)]
pub struct User {
    name: String,
}

impl User {
    pub fn new(name: &str) -> Self {
        Self {
            name: String::from(name),
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
}
impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

// ------------- Book -------------
// A single physical copy of a title. Books can only be created by the
// library, which also is the only mutator of the lending slot. The slot
// holds the id of the active lending and must agree with the library's
// current lendings map at all times.
#[derive(Debug)]
pub struct Book {
    id: BookId,
    title: Arc<Title>,
    lending: Option<LendingId>,
}

impl Book {
    pub(crate) fn new(id: BookId, title: Arc<Title>) -> Self {
        Self {
            id,
            title,
            lending: None,
        }
    }
    pub fn id(&self) -> BookId {
        self.id
    }
    pub fn title(&self) -> Arc<Title> {
        Arc::clone(&self.title)
    }
    pub fn is_available(&self) -> bool {
        self.lending.is_none()
    }
    pub fn lending(&self) -> Option<LendingId> {
        self.lending
    }
    // convenience accessors that reach through to the title
    pub fn name(&self) -> &str {
        self.title.name()
    }
    pub fn author(&self) -> &str {
        self.title.author()
    }
    pub fn year(&self) -> i32 {
        self.title.year()
    }
    pub(crate) fn set_lending(&mut self, lending: LendingId) {
        self.lending = Some(lending);
    }
    pub(crate) fn clear_lending(&mut self) {
        self.lending = None;
    }
}
impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Book {{id={}, {}, {}}}",
            self.id,
            self.title,
            if self.lending.is_none() {
                "available"
            } else {
                "lent"
            }
        )
    }
}

// ------------- Lending -------------
pub type LendingId = usize;

// A lending receipt: which copy went to which user and when, plus the
// return time once the copy has come back. Receipts stay in the lending
// history forever, which is why book and user are recorded by value/id
// rather than by reference into the live collections.
#[derive(Debug)]
pub struct Lending {
    lending: LendingId,
    book: BookId,
    user: User,
    lent_at: DateTime<Utc>,
    returned_at: Option<DateTime<Utc>>,
}

impl Lending {
    pub(crate) fn new(lending: LendingId, book: BookId, user: User, lent_at: DateTime<Utc>) -> Self {
        Self {
            lending,
            book,
            user,
            lent_at,
            returned_at: None,
        }
    }
    pub fn lending(&self) -> LendingId {
        self.lending
    }
    pub fn book(&self) -> BookId {
        self.book
    }
    pub fn user(&self) -> &User {
        &self.user
    }
    pub fn lent_at(&self) -> DateTime<Utc> {
        self.lent_at
    }
    pub fn returned_at(&self) -> Option<DateTime<Utc>> {
        self.returned_at
    }
    pub fn is_active(&self) -> bool {
        self.returned_at.is_none()
    }
    // once set, the return time never changes
    pub(crate) fn finish(&mut self, at: DateTime<Utc>) {
        if self.returned_at.is_none() {
            self.returned_at = Some(at);
        }
    }
}
impl fmt::Display for Lending {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Lending {{bookId={}, user={}, lentAt={}, returnedAt={}}}",
            self.book,
            self.user,
            self.lent_at.to_rfc3339(),
            match self.returned_at {
                Some(at) => at.to_rfc3339(),
                None => String::from("-"),
            }
        )
    }
}
