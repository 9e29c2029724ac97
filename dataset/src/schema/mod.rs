mod article;
mod author;

pub use self::{article::Article, author::Author};

use serde::{Deserialize, Serialize};

/// The full snapshot loaded from the dataset document. Loaded wholesale and
/// never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub authors: Vec<Author>,
    pub articles: Vec<Article>,
}

impl Dataset {
    /// Resolves an article's author by its foreign key. The collection is a
    /// static snapshot of trivial size, so a linear scan is sufficient.
    pub fn author_by_id(&self, author_id: i64) -> Option<&Author> {
        self.authors.iter().find(|author| author.id == author_id)
    }
}
