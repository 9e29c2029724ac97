pub mod loader;
pub mod pagination;
pub mod schema;

pub use self::{
    loader::{LoadError, LoadState},
    schema::{Article, Author, Dataset},
};
