#![allow(dead_code)]

use libranet::adapters::seed;
use libranet::application::catalog::Catalog;
use libranet::domain::{ItemId, LibraryItem};

/// サンプル資料6点を登録したカタログを作成
pub fn sample_catalog() -> Catalog {
    Catalog::with_items(seed::sample_items().expect("sample items are valid"))
}

/// 書籍1点だけのカタログを作成
pub fn single_book_catalog(id: u32, title: &str) -> Catalog {
    Catalog::with_items([
        LibraryItem::book(ItemId::new(id), title, "Test Author", 100).expect("valid book"),
    ])
}

pub fn ids(items: &[&LibraryItem]) -> Vec<u32> {
    items.iter().map(|item| item.id().value()).collect()
}
