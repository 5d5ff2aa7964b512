use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 貸出期間（日数）
pub const BORROW_PERIOD_DAYS: i64 = 14;

/// 延滞1日あたりの罰金
pub const FINE_RATE_PER_DAY: f64 = 10.0;

/// 日付の入力形式（YYYY-MM-DD）
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 資料ID - カタログ内で一意な整数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(u32);

impl ItemId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for ItemId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 罰金額
///
/// 不変条件：負にならない。延滞日数からのみ生成される。
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Fine(f64);

impl Fine {
    pub const ZERO: Fine = Fine(0.0);

    /// 延滞日数から罰金を計算する（0日以下は0）
    pub fn for_days_overdue(days: i64) -> Self {
        if days <= 0 {
            return Self::ZERO;
        }
        Self(days as f64 * FINE_RATE_PER_DAY)
    }

    pub fn amount(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Add for Fine {
    type Output = Fine;

    fn add(self, rhs: Fine) -> Fine {
        Fine(self.0 + rhs.0)
    }
}

impl AddAssign for Fine {
    fn add_assign(&mut self, rhs: Fine) {
        self.0 += rhs.0;
    }
}

impl Sum for Fine {
    fn sum<I: Iterator<Item = Fine>>(iter: I) -> Fine {
        iter.fold(Fine::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Fine> for Fine {
    fn sum<I: Iterator<Item = &'a Fine>>(iter: I) -> Fine {
        iter.copied().sum()
    }
}

impl fmt::Display for Fine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// 日付パースエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDate(pub String);

/// `YYYY-MM-DD` 形式の暦日をパースする
///
/// chrono は桁数に寛容なので、ゼロ埋め10文字であることを先に確認する。
pub fn parse_date(input: &str) -> Result<NaiveDate, InvalidDate> {
    let well_formed = input.len() == 10
        && input.char_indices().all(|(i, c)| match i {
            4 | 7 => c == '-',
            _ => c.is_ascii_digit(),
        });

    if !well_formed {
        return Err(InvalidDate(input.to_string()));
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| InvalidDate(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_iso() {
        let date = parse_date("2024-01-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_day_first() {
        let result = parse_date("01-01-2024");
        assert_eq!(result, Err(InvalidDate("01-01-2024".to_string())));
    }

    #[test]
    fn test_parse_date_rejects_unpadded_and_impossible_dates() {
        assert!(parse_date("2024-1-5").is_err());
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("").is_err());
        assert!(parse_date(" 2024-01-01").is_err());
    }

    #[test]
    fn test_parse_date_accepts_leap_day() {
        assert!(parse_date("2024-02-29").is_ok());
        assert!(parse_date("2023-02-29").is_err());
    }

    // TDD: Fine のテスト
    #[test]
    fn test_fine_for_days_overdue() {
        assert_eq!(Fine::for_days_overdue(0), Fine::ZERO);
        assert_eq!(Fine::for_days_overdue(-3), Fine::ZERO);
        assert_eq!(Fine::for_days_overdue(1).amount(), 10.0);
        assert_eq!(Fine::for_days_overdue(5).amount(), 50.0);
    }

    #[test]
    fn test_fine_sum() {
        let fines = [Fine::for_days_overdue(1), Fine::for_days_overdue(2)];
        let total: Fine = fines.iter().sum();
        assert_eq!(total.amount(), 30.0);
    }

    #[test]
    fn test_fine_display() {
        assert_eq!(Fine::for_days_overdue(5).to_string(), "50.0");
    }

    #[test]
    fn test_item_id_ordering() {
        assert!(ItemId::new(1) < ItemId::new(2));
        assert_eq!(ItemId::from(7).value(), 7);
        assert_eq!(ItemId::new(42).to_string(), "42");
    }
}
