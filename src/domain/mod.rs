// Domain layer: the three entities and their typed handles. No registry logic here.

pub mod model;

pub use model::{Author, AuthorId, Book, BookId, Contract, ContractId};
