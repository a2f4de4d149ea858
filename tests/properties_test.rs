use bookdeal::Registry;
use proptest::prelude::*;

fn valid_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 ./-]{0,20}"
}

fn blank_text() -> impl Strategy<Value = String> {
    "[ \t\n]{0,5}"
}

proptest! {
    #[test]
    fn valid_names_register_exactly_once(name in valid_text(), title in valid_text()) {
        let mut registry = Registry::new();
        let author = registry.add_author(name.clone()).unwrap();
        let book = registry.add_book(title.clone()).unwrap();

        prop_assert_eq!(registry.authors().filter(|a| a.id() == author).count(), 1);
        prop_assert_eq!(registry.books().filter(|b| b.id() == book).count(), 1);
        prop_assert_eq!(registry.author(author).unwrap().name(), name.as_str());
        prop_assert_eq!(registry.book(book).unwrap().title(), title.as_str());
    }

    #[test]
    fn blank_text_is_rejected(blank in blank_text()) {
        let mut registry = Registry::new();
        prop_assert!(registry.add_author(blank.clone()).unwrap_err().is_validation());
        prop_assert!(registry.add_book(blank.clone()).unwrap_err().is_validation());

        let author = registry.add_author("Jane Doe").unwrap();
        let book = registry.add_book("Moby Dick").unwrap();
        prop_assert!(registry.sign_contract(author, book, blank.clone(), 1).is_err());

        let contract = registry.sign_contract(author, book, "01/01/2001", 1).unwrap();
        prop_assert!(registry.set_author_name(author, blank.clone()).is_err());
        prop_assert!(registry.set_book_title(book, blank.clone()).is_err());
        prop_assert!(registry.set_contract_date(contract, blank).is_err());
        prop_assert_eq!(registry.contracts().count(), 1);
    }

    #[test]
    fn royalties_sign_iff_non_negative(royalties in any::<i64>()) {
        let mut registry = Registry::new();
        let author = registry.add_author("Jane Doe").unwrap();
        let book = registry.add_book("Moby Dick").unwrap();

        let signed = registry.sign_contract(author, book, "01/01/2001", royalties);
        prop_assert_eq!(signed.is_ok(), royalties >= 0);
        if let Ok(id) = signed {
            prop_assert_eq!(registry.contract(id).unwrap().royalties(), royalties as u64);
        }
    }

    #[test]
    fn total_royalties_is_the_sum(amounts in prop::collection::vec(0i64..1_000_000, 0..20)) {
        let mut registry = Registry::new();
        let author = registry.add_author("Jane Doe").unwrap();
        let books: Vec<_> = (0..3)
            .map(|i| registry.add_book(format!("Book {}", i)).unwrap())
            .collect();

        for (i, amount) in amounts.iter().enumerate() {
            registry
                .sign_contract(author, books[i % books.len()], "01/01/2001", *amount)
                .unwrap();
        }

        let expected: i64 = amounts.iter().sum();
        let view = registry.author(author).unwrap();
        prop_assert_eq!(view.total_royalties(), expected as u128);
        prop_assert!(view.books().len() <= books.len());
        prop_assert_eq!(view.contracts().len(), amounts.len());
    }
}
