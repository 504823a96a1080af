use std::collections::HashSet;

use librarian::catalog::{BookId, User};
use librarian::library::Library;
use librarian::sampledata::generate_samples;

fn setup() -> Library {
    let mut library = Library::new();
    generate_samples(58, |name, author, year| {
        library
            .add_book(name, author, year)
            .expect("seed data is valid");
    });
    library
}

fn ids(books: &[&librarian::catalog::Book]) -> HashSet<BookId> {
    books.iter().map(|book| book.id()).collect()
}

#[test]
fn full_search_returns_all_books() {
    let library = setup();
    assert_eq!(library.total_books(), library.search().execute().len());
}

#[test]
fn search_author_by_substring() {
    let library = setup();
    let result = library.search().by_author("Dickens").execute();
    assert_eq!(5, result.len());
    for book in &result {
        assert!(book.author().contains("Dickens"));
    }
}

#[test]
fn author_search_is_case_insensitive() {
    let library = setup();
    for fragment in ["dickens", "DICKENS"] {
        let result = library.search().by_author(fragment).execute();
        assert_eq!(5, result.len());
        for book in &result {
            assert!(book.author().contains("Dickens"));
        }
    }
}

#[test]
fn search_title_by_substring() {
    let library = setup();
    let result = library.search().by_title("war").execute();
    assert_eq!(2, result.len());
    for book in &result {
        assert!(book.name().contains("War"));
    }
}

#[test]
fn title_search_is_case_insensitive() {
    let library = setup();
    for fragment in ["WAR", "war"] {
        let result = library.search().by_title(fragment).execute();
        assert_eq!(2, result.len());
    }
}

#[test]
fn search_by_exact_year() {
    let library = setup();
    let result = library.search().by_year(1983).execute();
    assert_eq!(2, result.len());
    for book in &result {
        assert_eq!(1983, book.year());
    }
}

#[test]
fn not_found_yields_empty_collection() {
    let library = setup();
    assert!(
        library
            .search()
            .by_author("Machado de Assis")
            .execute()
            .is_empty()
    );
    let empty = Library::new();
    assert!(empty.search().by_author("Dickens").execute().is_empty());
}

#[test]
fn search_by_availability() {
    let mut library = setup();
    let user = User::new("Alicja");
    for book_id in [1, 2, 3] {
        library.lend_book(book_id, &user).expect("available");
    }
    let lent = library.search().by_availability(false).execute();
    assert_eq!(ids(&lent), HashSet::from([1, 2, 3]));
    let available = library.search().by_availability(true).execute();
    assert_eq!(library.total_books() - 3, available.len());
    for book in &available {
        assert!(book.is_available());
    }
}

#[test]
fn filters_conjoin_and_commute() {
    let library = setup();
    let author_then_title = library.search().by_author("a").by_title("the").execute();
    let title_then_author = library.search().by_title("the").by_author("a").execute();
    assert_eq!(ids(&author_then_title), ids(&title_then_author));
    for book in &author_then_title {
        assert!(book.author().to_lowercase().contains('a'));
        assert!(book.name().to_lowercase().contains("the"));
    }
}

#[test]
fn arbitrary_predicates_compose_with_named_filters() {
    let library = setup();
    let result = library
        .search()
        .by_author("austen")
        .by(|book| book.year() > 1990)
        .execute();
    assert_eq!(2, result.len());
    for book in &result {
        assert_eq!("Jane Austen", book.author());
        assert!(book.year() > 1990);
    }
}

#[test]
fn execute_can_be_called_again() {
    let library = setup();
    let query = library.search().by_author("dickens");
    let first = ids(&query.execute());
    let second = ids(&query.execute());
    assert_eq!(first, second);
    assert_eq!(5, first.len());
}
