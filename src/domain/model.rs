use chrono::NaiveDate;
use std::fmt;

macro_rules! entity_id {
    ( $( $(#[$meta:meta])* $name:ident ),* $(,)? ) => {
        $(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            pub(crate) registry: u64,
            pub(crate) index: usize,
        }

        impl $name {
            /// Position of the entity in its registry, in construction order.
            pub fn index(&self) -> usize {
                self.index
            }
        }
        )*
    };
}

entity_id!(
    /// Handle to an [`Author`] owned by a [`Registry`](crate::Registry).
    AuthorId,
    /// Handle to a [`Book`] owned by a [`Registry`](crate::Registry).
    BookId,
    /// Handle to a [`Contract`] owned by a [`Registry`](crate::Registry).
    ContractId,
);

/// A named party who may sign contracts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub(crate) id: AuthorId,
    pub(crate) name: String,
    pub(crate) contracts: Vec<ContractId>,
}

impl Author {
    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contracts in signing order.
    pub fn contract_ids(&self) -> &[ContractId] {
        &self.contracts
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A titled work that may be the subject of contracts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub(crate) id: BookId,
    pub(crate) title: String,
    pub(crate) contracts: Vec<ContractId>,
}

impl Book {
    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn contract_ids(&self) -> &[ContractId] {
        &self.contracts
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// The edge between one author and one book, with its own terms.
///
/// `author` and `book` are fixed once the contract is signed; only the
/// date and royalties may be amended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contract {
    pub(crate) id: ContractId,
    pub(crate) author: AuthorId,
    pub(crate) book: BookId,
    pub(crate) date: String,
    pub(crate) royalties: u64,
}

impl Contract {
    const DATE_FORMATS: [&'static str; 3] = ["%m/%d/%Y", "%Y-%m-%d", "%d.%m.%Y"];

    pub fn id(&self) -> ContractId {
        self.id
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn book(&self) -> BookId {
        self.book
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn royalties(&self) -> u64 {
        self.royalties
    }

    /// Best-effort calendar reading of `date`. The stored text is never
    /// required to parse.
    pub fn signed_on(&self) -> Option<NaiveDate> {
        let date = self.date.trim();
        Self::DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(date, format).ok())
    }
}
