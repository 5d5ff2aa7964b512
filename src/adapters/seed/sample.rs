use crate::domain::LibraryItem;

use super::{SeedError, SeedItem, into_items};

/// The catalog a fresh installation starts with
pub fn sample_records() -> Vec<SeedItem> {
    vec![
        book(1, "The Great Gatsby", "F. Scott Fitzgerald", 180),
        book(2, "To Kill a Mockingbird", "Harper Lee", 281),
        audiobook(3, "The Alchemist", "Paulo Coelho", 4.5),
        audiobook(4, "Atomic Habits", "James Clear", 5.2),
        emagazine(5, "National Geographic", "Various Authors", 256),
        emagazine(6, "Scientific American", "Various Authors", 312),
    ]
}

pub fn sample_items() -> Result<Vec<LibraryItem>, SeedError> {
    into_items(sample_records())
}

fn book(id: u32, title: &str, author: &str, page_count: u32) -> SeedItem {
    SeedItem::Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
        page_count,
    }
}

fn audiobook(id: u32, title: &str, author: &str, duration_hours: f64) -> SeedItem {
    SeedItem::Audiobook {
        id,
        title: title.to_string(),
        author: author.to_string(),
        duration_hours,
    }
}

fn emagazine(id: u32, title: &str, author: &str, issue_number: u32) -> SeedItem {
    SeedItem::EMagazine {
        id,
        title: title.to_string(),
        author: author.to_string(),
        issue_number,
        archived: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_items_are_valid() {
        let items = sample_items().unwrap();
        assert_eq!(items.len(), 6);
        assert!(items.iter().all(LibraryItem::is_available));
    }
}
