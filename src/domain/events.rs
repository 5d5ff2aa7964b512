use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Fine, ItemId};

/// イベント：資料が貸出された
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemBorrowed {
    pub item_id: ItemId,
    pub borrowed_on: NaiveDate,
    pub due_date: NaiveDate,
}

/// イベント：資料が返却された
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemReturned {
    pub item_id: ItemId,
    pub returned_on: NaiveDate,
    pub due_date: NaiveDate,
    pub days_overdue: i64,
    pub fine: Fine,
}

impl ItemReturned {
    pub fn was_overdue(&self) -> bool {
        self.days_overdue > 0
    }
}

/// イベント：オーディオブックが再生された
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudiobookPlayed {
    pub item_id: ItemId,
    pub title: String,
    pub duration_hours: f64,
}

/// イベント：電子雑誌の号がアーカイブされた
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueArchived {
    pub item_id: ItemId,
    pub title: String,
    pub issue_number: u32,
}

/// ドメインイベント統合型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainEvent {
    ItemBorrowed(ItemBorrowed),
    ItemReturned(ItemReturned),
    AudiobookPlayed(AudiobookPlayed),
    IssueArchived(IssueArchived),
}
