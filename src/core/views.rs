//! Read-only navigation over a [`Registry`].
//!
//! A view pairs an entity with the registry that owns it so the relationship
//! graph can be walked in either direction. Collections are returned as
//! freshly built `Vec`s; nothing here can mutate the registry.

use crate::core::registry::Registry;
use crate::domain::{Author, AuthorId, Book, BookId, Contract, ContractId};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy)]
pub struct AuthorView<'a> {
    registry: &'a Registry,
    author: &'a Author,
}

impl<'a> AuthorView<'a> {
    pub(crate) fn new(registry: &'a Registry, author: &'a Author) -> Self {
        Self { registry, author }
    }

    pub fn id(&self) -> AuthorId {
        self.author.id
    }

    pub fn name(&self) -> &'a str {
        &self.author.name
    }

    /// Snapshot of the author's contracts in signing order.
    pub fn contracts(&self) -> Vec<ContractView<'a>> {
        contract_views(self.registry, &self.author.contracts)
    }

    /// Distinct books this author has signed for, in order of first signing.
    pub fn books(&self) -> Vec<BookView<'a>> {
        let mut seen = HashSet::new();
        self.contracts()
            .into_iter()
            .map(|contract| contract.book())
            .filter(|book| seen.insert(book.id()))
            .collect()
    }

    /// Widened to `u128` so the sum of any number of contracts is exact.
    pub fn total_royalties(&self) -> u128 {
        self.contracts()
            .iter()
            .map(|contract| u128::from(contract.royalties()))
            .sum()
    }

    pub fn record(&self) -> &'a Author {
        self.author
    }
}

impl PartialEq for AuthorView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for AuthorView<'_> {}

impl fmt::Display for AuthorView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.author, f)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BookView<'a> {
    registry: &'a Registry,
    book: &'a Book,
}

impl<'a> BookView<'a> {
    pub(crate) fn new(registry: &'a Registry, book: &'a Book) -> Self {
        Self { registry, book }
    }

    pub fn id(&self) -> BookId {
        self.book.id
    }

    pub fn title(&self) -> &'a str {
        &self.book.title
    }

    pub fn contracts(&self) -> Vec<ContractView<'a>> {
        contract_views(self.registry, &self.book.contracts)
    }

    /// Distinct authors under contract for this book, in order of first signing.
    pub fn authors(&self) -> Vec<AuthorView<'a>> {
        let mut seen = HashSet::new();
        self.contracts()
            .into_iter()
            .map(|contract| contract.author())
            .filter(|author| seen.insert(author.id()))
            .collect()
    }

    pub fn record(&self) -> &'a Book {
        self.book
    }
}

impl PartialEq for BookView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for BookView<'_> {}

impl fmt::Display for BookView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.book, f)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ContractView<'a> {
    registry: &'a Registry,
    contract: &'a Contract,
}

impl<'a> ContractView<'a> {
    pub(crate) fn new(registry: &'a Registry, contract: &'a Contract) -> Self {
        Self { registry, contract }
    }

    pub fn id(&self) -> ContractId {
        self.contract.id
    }

    pub fn author(&self) -> AuthorView<'a> {
        AuthorView::new(self.registry, self.registry.author_entry(self.contract.author))
    }

    pub fn book(&self) -> BookView<'a> {
        BookView::new(self.registry, self.registry.book_entry(self.contract.book))
    }

    pub fn date(&self) -> &'a str {
        &self.contract.date
    }

    pub fn royalties(&self) -> u64 {
        self.contract.royalties
    }

    /// The underlying record, for callers that only need the raw fields.
    pub fn record(&self) -> &'a Contract {
        self.contract
    }
}

impl PartialEq for ContractView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for ContractView<'_> {}

impl fmt::Display for ContractView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contract(author: {}, book: {}, date: {}, royalties: {})",
            self.author(),
            self.book(),
            self.date(),
            self.royalties()
        )
    }
}

fn contract_views<'a>(registry: &'a Registry, ids: &[ContractId]) -> Vec<ContractView<'a>> {
    ids.iter()
        .map(|id| ContractView::new(registry, registry.contract_entry(*id)))
        .collect()
}
