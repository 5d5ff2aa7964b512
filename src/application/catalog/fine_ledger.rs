use std::collections::BTreeMap;

use crate::domain::{Fine, ItemId};

/// 罰金台帳
///
/// 資料IDごとの累積罰金。エントリがない資料の罰金は0。
#[derive(Debug, Clone, Default)]
pub struct FineLedger {
    entries: BTreeMap<ItemId, Fine>,
}

impl FineLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 罰金を加算する（0は記録しない）
    pub fn record(&mut self, item_id: ItemId, fine: Fine) {
        if fine.is_zero() {
            return;
        }
        *self.entries.entry(item_id).or_default() += fine;
    }

    pub fn for_item(&self, item_id: ItemId) -> Fine {
        self.entries.get(&item_id).copied().unwrap_or(Fine::ZERO)
    }

    pub fn total(&self) -> Fine {
        self.entries.values().sum()
    }

    /// 罰金のある資料をID昇順で返す
    pub fn entries(&self) -> impl Iterator<Item = (ItemId, Fine)> + '_ {
        self.entries.iter().map(|(id, fine)| (*id, *fine))
    }
}
