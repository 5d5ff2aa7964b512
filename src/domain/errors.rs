use super::ItemType;

/// 貸出のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorrowError {
    /// 既に貸出中
    NotAvailable,
    /// 日付が `YYYY-MM-DD` として解釈できない
    InvalidDate(String),
}

/// 返却のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnError {
    /// 貸出されていない
    NotBorrowed,
    /// 日付が `YYYY-MM-DD` として解釈できない
    InvalidDate(String),
}

/// 資料生成のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    /// 属性値が不正（ページ数0など）
    InvalidAttribute(&'static str),
}

/// 種別固有の操作を別種別の資料に対して呼んだ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrongItemType {
    pub expected: ItemType,
    pub actual: ItemType,
}
