use crate::core::{AuthorId, BookId, Registry};
use crate::utils::error::{LedgerError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_non_negative, validate_unique, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Declarative description of a registry, loaded from TOML.
///
/// Authors and books are referenced from contracts by name and title, so
/// both must be unique within one seed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub authors: Vec<AuthorSeed>,
    #[serde(default)]
    pub books: Vec<BookSeed>,
    #[serde(default)]
    pub contracts: Vec<ContractSeed>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorSeed {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSeed {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractSeed {
    pub author: String,
    pub book: String,
    pub date: String,
    pub royalties: i64,
}

impl SeedConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LedgerError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| LedgerError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Two authors, four books and four contracts, two of them on 01/01/2001.
    pub fn sample() -> Self {
        let contract = |author: &str, book: &str, date: &str, royalties| ContractSeed {
            author: author.to_string(),
            book: book.to_string(),
            date: date.to_string(),
            royalties,
        };

        Self {
            authors: ["Name 1", "Name 2"]
                .into_iter()
                .map(|name| AuthorSeed {
                    name: name.to_string(),
                })
                .collect(),
            books: ["Title 1", "Title 2", "Title 3", "Title 4"]
                .into_iter()
                .map(|title| BookSeed {
                    title: title.to_string(),
                })
                .collect(),
            contracts: vec![
                contract("Name 1", "Title 1", "02/01/2001", 10),
                contract("Name 1", "Title 2", "01/01/2001", 20),
                contract("Name 1", "Title 3", "03/01/2001", 30),
                contract("Name 2", "Title 4", "01/01/2001", 40),
            ],
        }
    }

    /// Validates the seed fields, then builds a fresh registry from it.
    ///
    /// Contract references are resolved here; a dangling author or book name
    /// fails the build and the partially built registry is dropped.
    pub fn build_registry(&self) -> Result<Registry> {
        self.validate()?;

        let mut registry = Registry::new();
        let mut authors: HashMap<&str, AuthorId> = HashMap::new();
        let mut books: HashMap<&str, BookId> = HashMap::new();

        for author in &self.authors {
            authors.insert(&author.name, registry.add_author(author.name.as_str())?);
        }
        for book in &self.books {
            books.insert(&book.title, registry.add_book(book.title.as_str())?);
        }
        for contract in &self.contracts {
            let author = lookup(&authors, "contracts.author", &contract.author)?;
            let book = lookup(&books, "contracts.book", &contract.book)?;
            registry.sign_contract(author, book, contract.date.as_str(), contract.royalties)?;
        }

        tracing::info!(
            authors = self.authors.len(),
            books = self.books.len(),
            contracts = self.contracts.len(),
            "Loaded seed"
        );
        Ok(registry)
    }
}

fn lookup<T: Copy>(ids: &HashMap<&str, T>, field: &str, key: &str) -> Result<T> {
    ids.get(key)
        .copied()
        .ok_or_else(|| LedgerError::validation(field, key, "No such entry declared in the seed"))
}

impl Validate for SeedConfig {
    fn validate(&self) -> Result<()> {
        for author in &self.authors {
            validate_non_empty_string("authors.name", &author.name)?;
        }
        for book in &self.books {
            validate_non_empty_string("books.title", &book.title)?;
        }
        validate_unique("authors.name", self.authors.iter().map(|a| a.name.as_str()))?;
        validate_unique("books.title", self.books.iter().map(|b| b.title.as_str()))?;

        for contract in &self.contracts {
            validate_non_empty_string("contracts.date", &contract.date)?;
            validate_non_negative("contracts.royalties", contract.royalties)?;
        }

        Ok(())
    }
}
