//! 庫存模型

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::descriptor::{AcquisitionKey, PartDescriptor};

/// 庫存快照
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockSnapshot {
    /// 現有庫存
    pub on_hand: u32,

    /// 調撥在途
    pub in_transit: u32,

    /// 已下單未到貨
    pub on_order: u32,
}

impl StockSnapshot {
    /// 創建新的庫存快照
    pub fn new(on_hand: u32) -> Self {
        Self {
            on_hand,
            in_transit: 0,
            on_order: 0,
        }
    }

    /// 建構器模式：設置在途數量
    pub fn with_in_transit(mut self, in_transit: u32) -> Self {
        self.in_transit = in_transit;
        self
    }

    /// 建構器模式：設置已下單數量
    pub fn with_on_order(mut self, on_order: u32) -> Self {
        self.on_order = on_order;
        self
    }

    /// 倉庫數量
    pub fn store_count(&self) -> u32 {
        self.on_hand
    }

    /// 轉運數量（在途 + 已下單）
    pub fn transfer_count(&self) -> u32 {
        self.in_transit.saturating_add(self.on_order)
    }

    /// 已擁有或即將擁有的總量
    pub fn covered(&self) -> u32 {
        self.store_count().saturating_add(self.transfer_count())
    }

    /// 合併另一份快照
    pub fn combine(&mut self, other: &StockSnapshot) {
        self.on_hand = self.on_hand.saturating_add(other.on_hand);
        self.in_transit = self.in_transit.saturating_add(other.in_transit);
        self.on_order = self.on_order.saturating_add(other.on_order);
    }
}

/// 倉庫帳本（唯讀）
pub trait StockLedger {
    /// 查詢某採購鍵的庫存，沒有記錄時回傳 None
    fn snapshot(&self, key: &AcquisitionKey) -> Option<StockSnapshot>;
}

impl<S: StockLedger + ?Sized> StockLedger for &S {
    fn snapshot(&self, key: &AcquisitionKey) -> Option<StockSnapshot> {
        (**self).snapshot(key)
    }
}

impl StockLedger for HashMap<AcquisitionKey, StockSnapshot> {
    fn snapshot(&self, key: &AcquisitionKey) -> Option<StockSnapshot> {
        self.get(key).copied()
    }
}

/// 記憶體內倉庫
#[derive(Debug, Clone, Default)]
pub struct InMemoryStock {
    entries: HashMap<AcquisitionKey, StockSnapshot>,
}

impl InMemoryStock {
    /// 創建空倉庫
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置某採購鍵的庫存
    pub fn with_stock(mut self, key: AcquisitionKey, snapshot: StockSnapshot) -> Self {
        self.insert(key, snapshot);
        self
    }

    /// 登記庫存（同鍵累加）
    pub fn insert(&mut self, key: AcquisitionKey, snapshot: StockSnapshot) {
        self.entries
            .entry(key)
            .and_modify(|existing| existing.combine(&snapshot))
            .or_insert(snapshot);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StockLedger for InMemoryStock {
    fn snapshot(&self, key: &AcquisitionKey) -> Option<StockSnapshot> {
        self.entries.get(key).copied()
    }
}

/// 在用零件記錄
///
/// 淨額計算前必須為每個生成的採購鍵登記一筆。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartInUse {
    pub key: AcquisitionKey,

    pub description: String,

    /// 名冊上安裝的數量（庫存單位）
    pub use_count: u32,

    pub stock: StockSnapshot,
}

impl PartInUse {
    /// 創建新的在用零件記錄
    pub fn new(descriptor: &PartDescriptor, use_count: u32, stock: StockSnapshot) -> Self {
        Self {
            key: descriptor.acquisition_key(),
            description: descriptor.description(),
            use_count,
            stock,
        }
    }
}
