use thiserror::Error;

use crate::domain::{ItemId, ItemType};

/// カタログ管理アプリケーション層のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// 資料が存在しない
    #[error("Item with ID {0} not found")]
    ItemNotFound(ItemId),

    /// 日付が `YYYY-MM-DD` として解釈できない
    #[error("Invalid date format '{0}'. Please use YYYY-MM-DD")]
    InvalidDate(String),

    /// 資料が貸出中
    #[error("Item {0} is not available for borrowing")]
    NotAvailable(ItemId),

    /// 資料が貸出されていない
    #[error("Item {0} was not borrowed")]
    NotBorrowed(ItemId),

    /// 種別固有の操作を別種別の資料に対して呼んだ
    #[error("Item {id} is of type {actual}, expected {expected}")]
    WrongItemType {
        id: ItemId,
        expected: ItemType,
        actual: ItemType,
    },
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, CatalogError>;
