pub mod query;
pub mod registry;
pub mod views;

pub use crate::domain::model::{Author, AuthorId, Book, BookId, Contract, ContractId};
pub use crate::utils::error::Result;
pub use registry::Registry;
pub use views::{AuthorView, BookView, ContractView};
