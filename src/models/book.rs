use serde::Serialize;

/// Library book record
///
/// Plain data holder; nothing here is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Book {
    pub title: String,
    pub authors: Vec<String>,
    pub publisher: String,
    pub year: Option<u16>,
    pub keywords: Vec<String>,
}

impl Book {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn add_author(&mut self, author: impl Into<String>) {
        self.authors.push(author.into());
    }

    pub fn set_publisher(&mut self, publisher: impl Into<String>) {
        self.publisher = publisher.into();
    }

    pub fn set_year(&mut self, year: u16) {
        self.year = Some(year);
    }

    pub fn add_keyword(&mut self, keyword: impl Into<String>) {
        self.keywords.push(keyword.into());
    }

    /// Case-insensitive match against the book's keywords
    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| k.eq_ignore_ascii_case(keyword))
    }
}
