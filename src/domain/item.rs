use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{
    AudiobookPlayed, BORROW_PERIOD_DAYS, BorrowError, Fine, IssueArchived, ItemBorrowed,
    ItemError, ItemId, ItemReturned, ReturnError, WrongItemType, parse_date,
};

// ============================================================================
// 種別
// ============================================================================

/// 資料種別タグ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    Book,
    Audiobook,
    EMagazine,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Book => "Book",
            ItemType::Audiobook => "Audiobook",
            ItemType::EMagazine => "E-Magazine",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 種別ごとの固有データ
///
/// 閉じた集合。種別固有の操作はパターンマッチで振り分ける。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    Book { page_count: u32 },
    Audiobook { duration_hours: f64 },
    #[serde(rename = "emagazine")]
    EMagazine { issue_number: u32, archived: bool },
}

impl ItemKind {
    pub fn item_type(&self) -> ItemType {
        match self {
            ItemKind::Book { .. } => ItemType::Book,
            ItemKind::Audiobook { .. } => ItemType::Audiobook,
            ItemKind::EMagazine { .. } => ItemType::EMagazine,
        }
    }
}

// ============================================================================
// 貸出状態
// ============================================================================

/// 貸出状態
///
/// 不変条件：返却期限は貸出中のときだけ存在する。型で保証する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Availability {
    Available,
    Borrowed { due_date: NaiveDate },
}

// ============================================================================
// LibraryItem エンティティ
// ============================================================================

/// カタログの資料1点
///
/// 生成は種別ごとのコンストラクタ経由のみ（属性値を検証するため）。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LibraryItem {
    id: ItemId,
    title: String,
    author: String,
    availability: Availability,
    kind: ItemKind,
}

impl LibraryItem {
    /// 書籍を作成する
    ///
    /// # エラー
    /// ページ数が0の場合は`ItemError::InvalidAttribute`
    pub fn book(
        id: ItemId,
        title: impl Into<String>,
        author: impl Into<String>,
        page_count: u32,
    ) -> Result<Self, ItemError> {
        if page_count == 0 {
            return Err(ItemError::InvalidAttribute("page count must be positive"));
        }
        Ok(Self::new(id, title, author, ItemKind::Book { page_count }))
    }

    /// オーディオブックを作成する
    ///
    /// # エラー
    /// 再生時間が正の有限値でない場合は`ItemError::InvalidAttribute`
    pub fn audiobook(
        id: ItemId,
        title: impl Into<String>,
        author: impl Into<String>,
        duration_hours: f64,
    ) -> Result<Self, ItemError> {
        if !duration_hours.is_finite() || duration_hours <= 0.0 {
            return Err(ItemError::InvalidAttribute("duration must be a positive number of hours"));
        }
        Ok(Self::new(id, title, author, ItemKind::Audiobook { duration_hours }))
    }

    /// 電子雑誌を作成する（未アーカイブ）
    ///
    /// # エラー
    /// 号数が0の場合は`ItemError::InvalidAttribute`
    pub fn emagazine(
        id: ItemId,
        title: impl Into<String>,
        author: impl Into<String>,
        issue_number: u32,
    ) -> Result<Self, ItemError> {
        if issue_number == 0 {
            return Err(ItemError::InvalidAttribute("issue number must be positive"));
        }
        Ok(Self::new(
            id,
            title,
            author,
            ItemKind::EMagazine {
                issue_number,
                archived: false,
            },
        ))
    }

    fn new(id: ItemId, title: impl Into<String>, author: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            availability: Availability::Available,
            kind,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn item_type(&self) -> ItemType {
        self.kind.item_type()
    }

    pub fn availability(&self) -> Availability {
        self.availability
    }

    pub fn is_available(&self) -> bool {
        matches!(self.availability, Availability::Available)
    }

    /// 返却期限（貸出中のみ）
    pub fn due_date(&self) -> Option<NaiveDate> {
        match self.availability {
            Availability::Available => None,
            Availability::Borrowed { due_date } => Some(due_date),
        }
    }

    /// 資料を貸し出す
    ///
    /// ビジネスルール：
    /// - 貸出可能な状態であること
    /// - 返却期限は貸出日 + 14日
    ///
    /// 失敗時は状態を変更しない。
    pub fn borrow(&mut self, borrow_date: &str) -> Result<ItemBorrowed, BorrowError> {
        if !self.is_available() {
            return Err(BorrowError::NotAvailable);
        }

        let borrowed_on = parse_date(borrow_date).map_err(|e| BorrowError::InvalidDate(e.0))?;
        let due_date = borrowed_on + Duration::days(BORROW_PERIOD_DAYS);

        self.availability = Availability::Borrowed { due_date };

        Ok(ItemBorrowed {
            item_id: self.id,
            borrowed_on,
            due_date,
        })
    }

    /// 資料を返却する
    ///
    /// ビジネスルール：
    /// - 貸出中であること
    /// - 返却期限を過ぎた日数 × 10.0 を罰金とする（期限当日までは0）
    ///
    /// 失敗時は状態を変更しない。
    pub fn return_item(&mut self, return_date: &str) -> Result<ItemReturned, ReturnError> {
        let due_date = self.due_date().ok_or(ReturnError::NotBorrowed)?;

        let returned_on = parse_date(return_date).map_err(|e| ReturnError::InvalidDate(e.0))?;
        let days_overdue = (returned_on - due_date).num_days().max(0);

        self.availability = Availability::Available;

        Ok(ItemReturned {
            item_id: self.id,
            returned_on,
            due_date,
            days_overdue,
            fine: Fine::for_days_overdue(days_overdue),
        })
    }

    /// 書籍のページ数
    pub fn page_count(&self) -> Result<u32, WrongItemType> {
        match self.kind {
            ItemKind::Book { page_count } => Ok(page_count),
            _ => Err(self.wrong_type(ItemType::Book)),
        }
    }

    /// オーディオブックを再生する（状態変更なし）
    pub fn play(&self) -> Result<AudiobookPlayed, WrongItemType> {
        match self.kind {
            ItemKind::Audiobook { duration_hours } => Ok(AudiobookPlayed {
                item_id: self.id,
                title: self.title.clone(),
                duration_hours,
            }),
            _ => Err(self.wrong_type(ItemType::Audiobook)),
        }
    }

    /// 電子雑誌の号をアーカイブする
    ///
    /// 一方向の遷移（false → true）。既にアーカイブ済みなら何もせず`None`を返す。
    pub fn archive(&mut self) -> Result<Option<IssueArchived>, WrongItemType> {
        let expected = ItemType::EMagazine;
        match &mut self.kind {
            ItemKind::EMagazine { archived: true, .. } => Ok(None),
            ItemKind::EMagazine {
                issue_number,
                archived,
            } => {
                *archived = true;
                Ok(Some(IssueArchived {
                    item_id: self.id,
                    title: self.title.clone(),
                    issue_number: *issue_number,
                }))
            }
            _ => Err(self.wrong_type(expected)),
        }
    }

    fn wrong_type(&self, expected: ItemType) -> WrongItemType {
        WrongItemType {
            expected,
            actual: self.item_type(),
        }
    }
}

impl fmt::Display for LibraryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}, Author: {}, Available: {}, Type: {}",
            self.id,
            self.title,
            self.author,
            yes_no(self.is_available()),
            self.item_type(),
        )?;

        match self.kind {
            ItemKind::Book { page_count } => write!(f, ", Pages: {}", page_count),
            ItemKind::Audiobook { duration_hours } => {
                write!(f, ", Duration: {:.2} hours", duration_hours)
            }
            ItemKind::EMagazine {
                issue_number,
                archived,
            } => write!(f, ", Issue: {}, Archived: {}", issue_number, yes_no(archived)),
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}
