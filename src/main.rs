// demonstration driver: walks through the lending workflow on seed data

use std::error::Error;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use librarian::catalog::User;
use librarian::library::Library;
use librarian::sampledata::generate_samples;

fn main() -> Result<(), Box<dyn Error>> {
    // optional external configuration, next to the binary's working directory
    let settings = config::Config::builder()
        .add_source(config::File::with_name("librarian").required(false))
        .build()?;
    let seed_samples = usize::try_from(settings.get_int("seed_samples").unwrap_or(5))?;
    let log_directive = settings
        .get_string("log")
        .unwrap_or_else(|_| String::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_directive)),
        )
        .init();

    print("Welcome to Librarian!");
    print("---------------------");
    print("This scenario shows how the librarian crate can be used to manage a library lending system.");
    print("The library is populated from librarian::sampledata::TOP_58_TITLES.\n");

    print("Let's first create a Library and add the first two books with add_book.\n");
    print("> let mut library = Library::new();");
    print("> generate_samples(2, |name, author, year| { library.add_book(name, author, year); });");

    let mut library = Library::new();
    seed(&mut library, 2);

    print("\nlist_all_titles shows an overview per title known to the catalog.\n");
    print("> library.list_all_titles();");
    for overview in library.list_all_titles() {
        print(&overview.to_string());
    }

    info!(seed_samples, "seeding more sample books");
    print(&format!(
        "\nNow we add the first {seed_samples} books of the table. The first two titles are added \
         again, so the library now holds more copies of those.\n"
    ));
    print(&format!("> generate_samples({seed_samples}, ...);"));
    print("> library.list_all_titles();");

    seed(&mut library, seed_samples);
    for overview in library.list_all_titles() {
        print(&overview.to_string());
    }

    print("\nAlicja lends the book with id 1. lend_book returns the lending receipt.\n");
    print("> let alicja = User::new(\"Alicja\");");
    print("> let lending = library.lend_book(1, &alicja)?;");

    let alicja = User::new("Alicja");
    let lending = library.lend_book(1, &alicja)?;
    print(&lending.to_string());
    let lent_book_id = lending.book();

    print("\nPrinting the book itself also shows that it is lent out.\n");
    print("> library.book(1);");
    if let Some(book) = library.book(lent_book_id) {
        print(&book.to_string());
    }

    print(
        "\nBogdan wants the same title and checks its overview first: one copy is with Alicja, \
         but another one is still available, so he lends that one.\n",
    );
    print("> let title = library.book(1).unwrap().title();");
    print("> library.title_overview(&title);");

    let title = library.book(1).ok_or("book with id 1 should exist")?.title();
    print(&library.title_overview(title.as_ref()).to_string());

    print("\n> let bogdan = User::new(\"Bogdan\");");
    print("> library.lend_book(3, &bogdan)?;");
    print("> library.title_overview(&title);");

    let bogdan = User::new("Bogdan");
    library.lend_book(3, &bogdan)?;
    print(&library.title_overview(title.as_ref()).to_string());

    print("\nOnce Alicja finishes her reading she returns the book, making it available again.\n");
    print("> library.return_book(1)?;");
    print("> library.title_overview(&title);");

    library.return_book(1)?;
    print(&library.title_overview(title.as_ref()).to_string());

    print(
        "\nAlicja might want another book from the same author. search returns a Query on which \
         filters accumulate until execute runs the search.\n",
    );
    print("> library.search().by_author(\"austen\").execute();");
    for book in library.search().by_author("austen").execute() {
        print(&book.to_string());
    }

    print("\nOr only the books from that author published after a certain year.\n");
    print("> library.search().by_author(\"austen\").by(|book| book.year() > 1990).execute();");
    let query = library
        .search()
        .by_author("austen")
        .by(|book| book.year() > 1990);
    for book in query.execute() {
        print(&book.to_string());
    }

    print("\nFinally, a machine-readable summary of the library state:\n");
    let overviews: Vec<serde_json::Value> = library
        .list_all_titles()
        .iter()
        .map(|overview| {
            serde_json::json!({
                "title": overview.title(),
                "total_copies": overview.total_copies(),
                "available_copies": overview.available_copies(),
            })
        })
        .collect();
    let summary = serde_json::json!({
        "total_books": library.total_books(),
        "active_lendings": library.current_lendings().len(),
        "lendings_ever": library.lending_history().len(),
        "titles": overviews,
    });
    print(&serde_json::to_string_pretty(&summary)?);

    Ok(())
}

fn seed(library: &mut Library, n_samples: usize) {
    generate_samples(n_samples, |name, author, year| {
        if let Err(error) = library.add_book(name, author, year) {
            warn!(%error, name, "skipping sample title");
        }
    });
}

fn print(message: &str) {
    println!("{message}");
}
