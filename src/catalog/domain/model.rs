use std::fmt;
use std::fmt::{Display, Formatter};
use crate::core::library::{LibraryError, LibraryResult};

// ItemKind carries the variant-specific payload alongside the kind tag.
#[derive(Debug, PartialEq, Clone)]
pub enum ItemKind {
    Book { author: String },
    Magazine { issue_number: i64 },
}

impl ItemKind {
    pub fn tag(&self) -> &'static str {
        match self {
            ItemKind::Book { .. } => "Book",
            ItemKind::Magazine { .. } => "Magazine",
        }
    }
}

// LibraryItem abstracts a borrowable catalog entry. Ids are not required
// to be unique; lookups resolve to the first match in insertion order.
#[derive(Debug, PartialEq, Clone)]
pub struct LibraryItem {
    pub id: i64,
    pub title: String,
    pub kind: ItemKind,
    // Only the borrow/give_back transitions may touch this flag.
    is_borrowed: bool,
}

impl LibraryItem {
    pub fn book(id: i64, title: &str, author: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            kind: ItemKind::Book { author: author.to_string() },
            is_borrowed: false,
        }
    }

    pub fn magazine(id: i64, title: &str, issue_number: i64) -> Self {
        Self {
            id,
            title: title.to_string(),
            kind: ItemKind::Magazine { issue_number },
            is_borrowed: false,
        }
    }

    pub fn is_borrowed(&self) -> bool {
        self.is_borrowed
    }

    // Available -> Borrowed, fails when the item is already out.
    pub fn borrow(&mut self) -> LibraryResult<()> {
        if self.is_borrowed {
            return Err(LibraryError::invalid_state("Item is already borrowed."));
        }
        self.is_borrowed = true;
        Ok(())
    }

    // Borrowed -> Available, fails when the item was never borrowed.
    pub fn give_back(&mut self) -> LibraryResult<()> {
        if !self.is_borrowed {
            return Err(LibraryError::invalid_state("Item was not borrowed."));
        }
        self.is_borrowed = false;
        Ok(())
    }

    fn status(&self) -> &'static str {
        if self.is_borrowed { "Borrowed" } else { "Available" }
    }
}

impl Display for LibraryItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ItemKind::Book { author } => {
                write!(f, "[Book] {}: {} by {} - {}", self.id, self.title, author, self.status())
            }
            ItemKind::Magazine { issue_number } => {
                write!(f, "[Magazine] {}: {}, Issue #{} - {}", self.id, self.title, issue_number, self.status())
            }
        }
    }
}
