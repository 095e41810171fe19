use serde::{Deserialize, Serialize};

/// A stored supporting message.
///
/// Only `mood` is ever used for retrieval; the remaining columns are
/// descriptive metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: i64,
    pub mood: String,
    pub quote: String,
    pub author: Option<String>,
    pub category: Option<String>,
    pub keywords: Option<String>,
}

/// A quote to be inserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewQuote {
    pub mood: String,
    pub quote: String,
    pub author: Option<String>,
    pub category: Option<String>,
    pub keywords: Option<String>,
}

impl NewQuote {
    /// A quote with no author, category or keywords.
    pub fn new(mood: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            mood: mood.into(),
            quote: quote.into(),
            author: None,
            category: None,
            keywords: None,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}
