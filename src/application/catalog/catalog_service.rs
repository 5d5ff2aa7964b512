use std::collections::BTreeMap;

use crate::domain::{
    AudiobookPlayed, BorrowError, Fine, IssueArchived, ItemBorrowed, ItemId, ItemReturned,
    ItemType, LibraryItem, ReturnError, WrongItemType,
};

use super::errors::{CatalogError, Result};
use super::fine_ledger::FineLedger;

/// 資料カタログ
///
/// すべての資料と罰金台帳を所有する唯一の状態を持つコンポーネント。
/// 資料はID昇順で保持され、検索・一覧の結果もID昇順になる。
///
/// 変更系の操作は`&mut self`を取るため、同一カタログへの同時変更は型で排除される。
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: BTreeMap<ItemId, LibraryItem>,
    fines: FineLedger,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 資料一式からカタログを作成する（同一IDは後勝ち）
    pub fn with_items(items: impl IntoIterator<Item = LibraryItem>) -> Self {
        let mut catalog = Self::new();
        for item in items {
            catalog.add_item(item);
        }
        catalog
    }

    // ========================================================================
    // 登録・参照
    // ========================================================================

    /// 資料を登録する
    ///
    /// 同じIDの資料が既にあれば上書きする。
    pub fn add_item(&mut self, item: LibraryItem) {
        tracing::debug!(item_id = %item.id(), item_type = %item.item_type(), "item added");
        self.items.insert(item.id(), item);
    }

    pub fn get_item(&self, id: ItemId) -> Option<&LibraryItem> {
        self.items.get(&id)
    }

    /// 全資料（ID昇順）
    pub fn items(&self) -> impl Iterator<Item = &LibraryItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // ========================================================================
    // 貸出・返却
    // ========================================================================

    /// 資料を貸し出す
    ///
    /// # エラー
    /// - ItemNotFound: 資料が存在しない
    /// - NotAvailable: 既に貸出中
    /// - InvalidDate: 日付が解釈できない
    pub fn borrow_item(&mut self, id: ItemId, borrow_date: &str) -> Result<ItemBorrowed> {
        let item = self.item_mut(id)?;

        let event = item.borrow(borrow_date).map_err(|e| match e {
            BorrowError::NotAvailable => CatalogError::NotAvailable(id),
            BorrowError::InvalidDate(input) => CatalogError::InvalidDate(input),
        })?;

        tracing::debug!(item_id = %id, due_date = %event.due_date, "item borrowed");
        Ok(event)
    }

    /// 資料を返却する
    ///
    /// 延滞していれば罰金を台帳に加算する。返却イベントの`fine`が今回の罰金（なければ0）。
    ///
    /// # エラー
    /// - ItemNotFound: 資料が存在しない
    /// - NotBorrowed: 貸出されていない
    /// - InvalidDate: 日付が解釈できない
    pub fn return_item(&mut self, id: ItemId, return_date: &str) -> Result<ItemReturned> {
        let item = self.item_mut(id)?;

        let event = item.return_item(return_date).map_err(|e| match e {
            ReturnError::NotBorrowed => CatalogError::NotBorrowed(id),
            ReturnError::InvalidDate(input) => CatalogError::InvalidDate(input),
        })?;

        self.fines.record(id, event.fine);

        tracing::debug!(
            item_id = %id,
            days_overdue = event.days_overdue,
            fine = event.fine.amount(),
            "item returned"
        );
        Ok(event)
    }

    // ========================================================================
    // 検索・一覧
    // ========================================================================

    /// タイトルの部分一致検索（大文字小文字を区別しない）
    pub fn search_by_title(&self, query: &str) -> Vec<&LibraryItem> {
        let query = query.to_lowercase();
        self.filter(|item| item.title().to_lowercase().contains(&query))
    }

    /// 著者の部分一致検索（大文字小文字を区別しない）
    pub fn search_by_author(&self, query: &str) -> Vec<&LibraryItem> {
        let query = query.to_lowercase();
        self.filter(|item| item.author().to_lowercase().contains(&query))
    }

    pub fn search_by_type(&self, item_type: ItemType) -> Vec<&LibraryItem> {
        self.filter(|item| item.item_type() == item_type)
    }

    pub fn available_items(&self) -> Vec<&LibraryItem> {
        self.filter(LibraryItem::is_available)
    }

    pub fn borrowed_items(&self) -> Vec<&LibraryItem> {
        self.filter(|item| !item.is_available())
    }

    fn filter(&self, predicate: impl Fn(&LibraryItem) -> bool) -> Vec<&LibraryItem> {
        self.items.values().filter(|item| predicate(item)).collect()
    }

    // ========================================================================
    // 罰金
    // ========================================================================

    pub fn total_fines(&self) -> Fine {
        self.fines.total()
    }

    pub fn fines_for_item(&self, id: ItemId) -> Fine {
        self.fines.for_item(id)
    }

    pub fn fine_ledger(&self) -> &FineLedger {
        &self.fines
    }

    // ========================================================================
    // 種別固有の操作
    // ========================================================================

    /// 書籍のページ数
    pub fn page_count(&self, id: ItemId) -> Result<u32> {
        let item = self.get_item(id).ok_or(CatalogError::ItemNotFound(id))?;
        item.page_count().map_err(|e| kind_error(id, e))
    }

    /// オーディオブックを再生する
    pub fn play_audiobook(&self, id: ItemId) -> Result<AudiobookPlayed> {
        let item = self.get_item(id).ok_or(CatalogError::ItemNotFound(id))?;
        item.play().map_err(|e| kind_error(id, e))
    }

    /// 電子雑誌の号をアーカイブする
    ///
    /// 既にアーカイブ済みなら`Ok(None)`。通知は初回のみ発生させる想定。
    pub fn archive_issue(&mut self, id: ItemId) -> Result<Option<IssueArchived>> {
        let item = self.item_mut(id)?;
        let event = item.archive().map_err(|e| kind_error(id, e))?;

        if event.is_some() {
            tracing::debug!(item_id = %id, "issue archived");
        }
        Ok(event)
    }

    fn item_mut(&mut self, id: ItemId) -> Result<&mut LibraryItem> {
        self.items.get_mut(&id).ok_or(CatalogError::ItemNotFound(id))
    }
}

fn kind_error(id: ItemId, err: WrongItemType) -> CatalogError {
    CatalogError::WrongItemType {
        id,
        expected: err.expected,
        actual: err.actual,
    }
}
