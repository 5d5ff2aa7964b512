use std::fs;
use std::path::Path;

use crate::domain::LibraryItem;

use super::{SeedError, SeedItem, into_items};

/// Load catalog items from a JSON seed file
///
/// The file holds an array of items tagged by `"type"`:
///
/// ```json
/// [
///   { "type": "book", "id": 1, "title": "Dune", "author": "Frank Herbert", "page_count": 412 },
///   { "type": "audiobook", "id": 2, "title": "Dune", "author": "Frank Herbert", "duration_hours": 21.0 },
///   { "type": "emagazine", "id": 3, "title": "Wired", "author": "Various Authors", "issue_number": 7 }
/// ]
/// ```
pub fn load_from_path(path: &Path) -> Result<Vec<LibraryItem>, SeedError> {
    let contents = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let items = parse_str(&contents)?;
    tracing::info!(path = %path.display(), count = items.len(), "seed file loaded");
    Ok(items)
}

/// Parse catalog items from JSON text
pub fn parse_str(json: &str) -> Result<Vec<LibraryItem>, SeedError> {
    let records: Vec<SeedItem> = serde_json::from_str(json).map_err(SeedError::Json)?;
    into_items(records)
}
