use std::sync::Arc;

use librarian::catalog::{Title, User};
use librarian::library::Library;
use librarian::sampledata::generate_samples;

fn seed(library: &mut Library, n_samples: usize) {
    generate_samples(n_samples, |name, author, year| {
        library
            .add_book(name, author, year)
            .expect("seed data is valid");
    });
}

fn title_of(library: &Library, book_id: u64) -> Arc<Title> {
    library.book(book_id).expect("book exists").title()
}

#[test]
fn overview_counts_follow_lend_and_return() {
    let mut library = Library::new();
    let first = library.add_book("X", "A", 2000).expect("valid").id();
    let second = library.add_book("X", "A", 2000).expect("valid").id();
    assert_eq!((1, 2), (first, second));
    let user = User::new("Alicja");
    library.lend_book(first, &user).expect("book is available");

    let title = title_of(&library, first);
    let overview = library.title_overview(&title);
    assert_eq!(2, overview.total_copies());
    assert_eq!(1, overview.available_copies());
    assert_eq!(1, overview.current_lendings().len());

    library.return_book(first).expect("book is lent");
    let overview = library.title_overview(&title);
    assert_eq!(2, overview.total_copies());
    assert_eq!(2, overview.available_copies());
    assert!(overview.current_lendings().is_empty());
}

#[test]
fn list_all_gets_correct_overview_per_title() {
    let mut library = Library::new();
    let alicja = User::new("Alicja");
    let bogdan = User::new("Bogdan");

    // first 4 titles, then 2 extra copies of each of the first 2 titles
    seed(&mut library, 4);
    seed(&mut library, 2);
    seed(&mut library, 2);

    library.lend_book(1, &alicja).expect("available");
    library.lend_book(2, &alicja).expect("available");
    library.lend_book(6, &bogdan).expect("available");
    library.lend_book(3, &bogdan).expect("available");

    let all_overviews = library.list_all_titles();
    assert_eq!(4, all_overviews.len());

    // (total copies, available copies, lendings) per title
    let expectations = [
        (title_of(&library, 1), (3, 2, 1)),
        (title_of(&library, 2), (3, 1, 2)),
        (title_of(&library, 3), (1, 0, 1)),
        (title_of(&library, 4), (1, 1, 0)),
    ];
    for (title, (total, available, lendings)) in &expectations {
        let overview = all_overviews
            .iter()
            .find(|overview| overview.title() == title.as_ref())
            .unwrap_or_else(|| panic!("no overview for {title}"));
        assert_eq!(*total, overview.total_copies(), "total for {title}");
        assert_eq!(
            *available,
            overview.available_copies(),
            "available for {title}"
        );
        assert_eq!(
            *lendings,
            overview.current_lendings().len(),
            "lendings for {title}"
        );
    }
}

#[test]
fn unknown_title_yields_zero_counts() {
    let mut library = Library::new();
    seed(&mut library, 3);
    let title = Title::new("Nonexistent", "Nobody", 1900).expect("valid");
    let overview = library.title_overview(&title);
    assert_eq!(0, overview.total_copies());
    assert_eq!(0, overview.available_copies());
    assert!(overview.books().is_empty());
    assert!(overview.current_lendings().is_empty());
}

#[test]
fn titles_without_copies_remain_listed() {
    let mut library = Library::new();
    let id = library.add_book("Y", "B", 1990).expect("valid").id();
    library.remove_book(id).expect("book is available");
    let all_overviews = library.list_all_titles();
    assert_eq!(1, all_overviews.len());
    assert_eq!(0, all_overviews[0].total_copies());
    assert_eq!(0, all_overviews[0].available_copies());
}

#[test]
fn available_books_filters_the_copy_subset() {
    let mut library = Library::new();
    seed(&mut library, 2);
    seed(&mut library, 2);
    let user = User::new("Alicja");
    library.lend_book(1, &user).expect("available");

    let title = title_of(&library, 1);
    let overview = library.title_overview(&title);
    let available = overview.available_books();
    assert_eq!(1, available.len());
    assert_eq!(3, available[0].id());
    assert!(available[0].is_available());
}

#[test]
fn overview_invariant_holds_under_arbitrary_sequences() {
    let mut library = Library::new();
    let user = User::new("Alicja");
    seed(&mut library, 3);
    seed(&mut library, 3);
    library.lend_book(1, &user).expect("available");
    library.lend_book(4, &user).expect("available");
    library.return_book(1).expect("lent");
    library.lend_book(2, &user).expect("available");

    for overview in library.list_all_titles() {
        assert_eq!(
            overview.available_copies(),
            overview.total_copies() - overview.current_lendings().len()
        );
        assert_eq!(
            overview.available_copies(),
            overview.available_books().len()
        );
    }
}
