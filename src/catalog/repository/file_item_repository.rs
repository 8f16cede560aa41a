use std::fs;
use std::path::PathBuf;
use tracing::debug;
use crate::catalog::domain::model::{ItemKind, LibraryItem};
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// FileItemRepository persists the whole catalog to a pipe-delimited text
// file, one line per item:
//
//   <Kind>|<Id>|<Title>|<True|False>|<Author or IssueNumber>
//
// Titles are written raw; a title containing '|' or a newline corrupts the
// format. Accepted limitation of the flat-file layout.
pub(crate) struct FileItemRepository {
    path: PathBuf,
}

impl FileItemRepository {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Repository<LibraryItem> for FileItemRepository {
    fn save_all(&self, items: &[LibraryItem]) -> LibraryResult<usize> {
        let mut contents = String::new();
        for item in items {
            contents.push_str(encode_line(item).as_str());
            contents.push('\n');
        }
        fs::write(&self.path, contents)?;
        debug!("saved {} items to {:?}", items.len(), self.path);
        Ok(items.len())
    }

    fn load_all(&self) -> LibraryResult<Option<Vec<LibraryItem>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        let mut items = Vec::new();
        for line in contents.lines() {
            if let Some(item) = decode_line(line)? {
                items.push(item);
            }
        }
        debug!("loaded {} items from {:?}", items.len(), self.path);
        Ok(Some(items))
    }
}

fn encode_line(item: &LibraryItem) -> String {
    let borrowed = if item.is_borrowed() { "True" } else { "False" };
    match &item.kind {
        ItemKind::Book { author } => {
            format!("Book|{}|{}|{}|{}", item.id, item.title, borrowed, author)
        }
        ItemKind::Magazine { issue_number } => {
            format!("Magazine|{}|{}|{}|{}", item.id, item.title, borrowed, issue_number)
        }
    }
}

// Lines with fewer than five fields and lines with an unknown kind tag are
// skipped without a trace. A malformed numeric or boolean field fails the
// whole load instead.
fn decode_line(line: &str) -> LibraryResult<Option<LibraryItem>> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() < 5 {
        return Ok(None);
    }
    let id: i64 = fields[1].parse()
        .map_err(|_| LibraryError::parse(format!("invalid item id {:?}", fields[1]).as_str()))?;
    let borrowed = decode_flag(fields[3])?;
    let mut item = match fields[0] {
        "Book" => LibraryItem::book(id, fields[2], fields[4]),
        "Magazine" => {
            let issue_number: i64 = fields[4].parse()
                .map_err(|_| LibraryError::parse(format!("invalid issue number {:?}", fields[4]).as_str()))?;
            LibraryItem::magazine(id, fields[2], issue_number)
        }
        _ => return Ok(None),
    };
    // replay the borrow transition instead of poking the flag directly
    if borrowed {
        item.borrow()?;
    }
    Ok(Some(item))
}

fn decode_flag(field: &str) -> LibraryResult<bool> {
    match field {
        "True" => Ok(true),
        "False" => Ok(false),
        other => Err(LibraryError::parse(format!("invalid borrowed flag {:?}", other).as_str())),
    }
}
