use crate::core::views::{AuthorView, BookView, ContractView};
use crate::domain::{Author, AuthorId, Book, BookId, Contract, ContractId};
use crate::utils::error::{LedgerError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_non_negative};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_REGISTRY_TAG: AtomicU64 = AtomicU64::new(1);

/// Owns every author, book and contract of one independent world.
///
/// Entities are append-only. Handles issued by one registry are rejected by
/// every other registry.
#[derive(Debug)]
pub struct Registry {
    tag: u64,
    authors: Vec<Author>,
    books: Vec<Book>,
    contracts: Vec<Contract>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            tag: NEXT_REGISTRY_TAG.fetch_add(1, Ordering::Relaxed),
            authors: Vec::new(),
            books: Vec::new(),
            contracts: Vec::new(),
        }
    }

    pub fn add_author(&mut self, name: impl Into<String>) -> Result<AuthorId> {
        let name = name.into();
        validate_non_empty_string("author.name", &name)?;

        let id = AuthorId {
            registry: self.tag,
            index: self.authors.len(),
        };
        tracing::debug!(author = %name, index = id.index, "Registered author");
        self.authors.push(Author {
            id,
            name,
            contracts: Vec::new(),
        });
        Ok(id)
    }

    pub fn add_book(&mut self, title: impl Into<String>) -> Result<BookId> {
        let title = title.into();
        validate_non_empty_string("book.title", &title)?;

        let id = BookId {
            registry: self.tag,
            index: self.books.len(),
        };
        tracing::debug!(book = %title, index = id.index, "Registered book");
        self.books.push(Book {
            id,
            title,
            contracts: Vec::new(),
        });
        Ok(id)
    }

    /// Has `author` sign a new contract for `book`.
    ///
    /// Every field is validated before anything is recorded; on success the
    /// contract is registered, then linked to the author, then to the book.
    pub fn sign_contract(
        &mut self,
        author: AuthorId,
        book: BookId,
        date: impl Into<String>,
        royalties: i64,
    ) -> Result<ContractId> {
        let date = date.into();
        self.check_author(author)?;
        self.check_book(book)?;
        validate_non_empty_string("contract.date", &date)?;
        let royalties = validate_non_negative("contract.royalties", royalties)?;

        let id = ContractId {
            registry: self.tag,
            index: self.contracts.len(),
        };
        tracing::debug!(
            author = %self.authors[author.index],
            book = %self.books[book.index],
            date = %date,
            royalties,
            "Signed contract"
        );
        self.contracts.push(Contract {
            id,
            author,
            book,
            date,
            royalties,
        });
        self.authors[author.index].contracts.push(id);
        self.books[book.index].contracts.push(id);
        Ok(id)
    }

    pub fn set_author_name(&mut self, id: AuthorId, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        self.check_author(id)?;
        validate_non_empty_string("author.name", &name)?;

        let author = &mut self.authors[id.index];
        tracing::debug!(from = %author.name, to = %name, "Renamed author");
        author.name = name;
        Ok(())
    }

    pub fn set_book_title(&mut self, id: BookId, title: impl Into<String>) -> Result<()> {
        let title = title.into();
        self.check_book(id)?;
        validate_non_empty_string("book.title", &title)?;

        let book = &mut self.books[id.index];
        tracing::debug!(from = %book.title, to = %title, "Retitled book");
        book.title = title;
        Ok(())
    }

    pub fn set_contract_date(&mut self, id: ContractId, date: impl Into<String>) -> Result<()> {
        let date = date.into();
        self.check_contract(id)?;
        validate_non_empty_string("contract.date", &date)?;

        tracing::debug!(contract = id.index, date = %date, "Amended contract date");
        self.contracts[id.index].date = date;
        Ok(())
    }

    pub fn set_contract_royalties(&mut self, id: ContractId, royalties: i64) -> Result<()> {
        self.check_contract(id)?;
        let royalties = validate_non_negative("contract.royalties", royalties)?;

        tracing::debug!(contract = id.index, royalties, "Amended contract royalties");
        self.contracts[id.index].royalties = royalties;
        Ok(())
    }

    pub fn author(&self, id: AuthorId) -> Result<AuthorView<'_>> {
        self.check_author(id)?;
        Ok(AuthorView::new(self, &self.authors[id.index]))
    }

    pub fn book(&self, id: BookId) -> Result<BookView<'_>> {
        self.check_book(id)?;
        Ok(BookView::new(self, &self.books[id.index]))
    }

    pub fn contract(&self, id: ContractId) -> Result<ContractView<'_>> {
        self.check_contract(id)?;
        Ok(ContractView::new(self, &self.contracts[id.index]))
    }

    /// Every author in registration order.
    pub fn authors(&self) -> impl Iterator<Item = AuthorView<'_>> + '_ {
        self.authors.iter().map(move |author| AuthorView::new(self, author))
    }

    pub fn books(&self) -> impl Iterator<Item = BookView<'_>> + '_ {
        self.books.iter().map(move |book| BookView::new(self, book))
    }

    /// Every contract in signing order.
    pub fn contracts(&self) -> impl Iterator<Item = ContractView<'_>> + '_ {
        self.contracts
            .iter()
            .map(move |contract| ContractView::new(self, contract))
    }

    /// First registered author carrying `name`.
    pub fn find_author(&self, name: &str) -> Option<AuthorView<'_>> {
        self.authors().find(|author| author.name() == name)
    }

    pub fn find_book(&self, title: &str) -> Option<BookView<'_>> {
        self.books().find(|book| book.title() == title)
    }

    pub(crate) fn author_entry(&self, id: AuthorId) -> &Author {
        &self.authors[id.index]
    }

    pub(crate) fn book_entry(&self, id: BookId) -> &Book {
        &self.books[id.index]
    }

    pub(crate) fn contract_entry(&self, id: ContractId) -> &Contract {
        &self.contracts[id.index]
    }

    fn check_author(&self, id: AuthorId) -> Result<()> {
        if id.registry != self.tag || id.index >= self.authors.len() {
            return Err(LedgerError::validation(
                "contract.author",
                format!("{:?}", id),
                "Author does not belong to this registry",
            ));
        }
        Ok(())
    }

    fn check_book(&self, id: BookId) -> Result<()> {
        if id.registry != self.tag || id.index >= self.books.len() {
            return Err(LedgerError::validation(
                "contract.book",
                format!("{:?}", id),
                "Book does not belong to this registry",
            ));
        }
        Ok(())
    }

    fn check_contract(&self, id: ContractId) -> Result<()> {
        if id.registry != self.tag || id.index >= self.contracts.len() {
            return Err(LedgerError::validation(
                "contract",
                format!("{:?}", id),
                "Contract does not belong to this registry",
            ));
        }
        Ok(())
    }
}
