//! Initial catalog contents.
//!
//! Items come either from the built-in sample set or from a JSON seed file.
//! Both go through [`SeedItem::into_item`] so the same attribute validation
//! applies to every item that reaches the catalog.

pub mod json;
pub mod sample;

use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{ItemError, ItemId, LibraryItem};

pub use json::{load_from_path, parse_str};
pub use sample::sample_items;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Seed file is not valid JSON")]
    Json(#[source] serde_json::Error),

    #[error("Seed item {id} is invalid: {reason}")]
    InvalidItem { id: ItemId, reason: &'static str },

    #[error("Seed contains item ID {0} more than once")]
    DuplicateId(ItemId),
}

/// One catalog entry as written in a seed file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SeedItem {
    Book {
        id: u32,
        title: String,
        author: String,
        page_count: u32,
    },
    Audiobook {
        id: u32,
        title: String,
        author: String,
        duration_hours: f64,
    },
    #[serde(rename = "emagazine")]
    EMagazine {
        id: u32,
        title: String,
        author: String,
        issue_number: u32,
        #[serde(default)]
        archived: bool,
    },
}

impl SeedItem {
    pub fn id(&self) -> ItemId {
        match self {
            SeedItem::Book { id, .. }
            | SeedItem::Audiobook { id, .. }
            | SeedItem::EMagazine { id, .. } => ItemId::new(*id),
        }
    }

    /// Validate and build the catalog item
    pub fn into_item(self) -> Result<LibraryItem, SeedError> {
        let id = self.id();
        let invalid = |err: ItemError| match err {
            ItemError::InvalidAttribute(reason) => SeedError::InvalidItem { id, reason },
        };

        match self {
            SeedItem::Book {
                title,
                author,
                page_count,
                ..
            } => LibraryItem::book(id, title, author, page_count).map_err(invalid),
            SeedItem::Audiobook {
                title,
                author,
                duration_hours,
                ..
            } => LibraryItem::audiobook(id, title, author, duration_hours).map_err(invalid),
            SeedItem::EMagazine {
                title,
                author,
                issue_number,
                archived,
                ..
            } => {
                let mut item =
                    LibraryItem::emagazine(id, title, author, issue_number).map_err(invalid)?;
                if archived {
                    // freshly built e-magazines always accept archiving
                    let _ = item.archive();
                }
                Ok(item)
            }
        }
    }
}

/// Build catalog items from seed records, rejecting repeated IDs
pub fn into_items(records: Vec<SeedItem>) -> Result<Vec<LibraryItem>, SeedError> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .map(|record| {
            if !seen.insert(record.id()) {
                return Err(SeedError::DuplicateId(record.id()));
            }
            record.into_item()
        })
        .collect()
}
