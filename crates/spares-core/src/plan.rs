//! 生成結果行模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::descriptor::{AcquisitionKey, PartDescriptor, StockCategory};
use crate::inventory::StockSnapshot;

/// 生成結果行
///
/// `planned_count` 一律由 `target_count - store_count - transfer_count` 重新計算，
/// 不會在前一次的計劃數量上再扣減。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedLine {
    /// 行ID
    pub id: Uuid,

    pub descriptor: PartDescriptor,

    /// 顯示用描述
    pub description: String,

    /// 名冊上安裝的數量
    pub use_count: u32,

    /// 倉庫數量
    pub store_count: u32,

    /// 在途與已下單數量
    pub transfer_count: u32,

    /// 合併後的目標數量（毛需求）
    pub target_count: u32,

    /// 建議仍需取得的數量
    pub planned_count: u32,

    /// 每單位重量（噸）
    pub unit_tonnage: Decimal,

    /// 每單位成本
    pub unit_cost: Decimal,

    /// 是否要取得（介面可切換）
    pub should_acquire: bool,
}

impl GeneratedLine {
    /// 創建新的結果行（淨額計算前，計劃數量 = 目標數量）
    pub fn new(descriptor: PartDescriptor, target_count: u32, unit_cost: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: descriptor.description(),
            unit_tonnage: descriptor.unit_tonnage,
            descriptor,
            use_count: 0,
            store_count: 0,
            transfer_count: 0,
            target_count,
            planned_count: target_count,
            unit_cost,
            should_acquire: true,
        }
    }

    /// 建構器模式：設置使用數量
    pub fn with_use_count(mut self, use_count: u32) -> Self {
        self.use_count = use_count;
        self
    }

    /// 建構器模式：設置庫存數量（僅供顯示）
    pub fn with_stock(mut self, stock: &StockSnapshot) -> Self {
        self.store_count = stock.store_count();
        self.transfer_count = stock.transfer_count();
        self
    }

    /// 回傳計劃數量已替換的新行
    pub fn with_planned_count(&self, planned_count: u32) -> Self {
        Self {
            planned_count,
            ..self.clone()
        }
    }

    /// 建構器模式：設置是否取得
    pub fn with_should_acquire(mut self, should_acquire: bool) -> Self {
        self.should_acquire = should_acquire;
        self
    }

    pub fn acquisition_key(&self) -> AcquisitionKey {
        self.descriptor.acquisition_key()
    }

    pub fn stock_category(&self) -> StockCategory {
        self.descriptor.stock_category()
    }

    /// 扣除庫存後的淨需求（可能為負）
    pub fn net_requirement(&self, stock: &StockSnapshot) -> i64 {
        i64::from(self.target_count) - i64::from(stock.covered())
    }

    /// 總成本 = 單位成本 × 計劃數量
    pub fn total_cost(&self) -> Decimal {
        self.unit_cost * Decimal::from(self.planned_count)
    }

    /// 計劃重量（噸）
    pub fn planned_tonnage(&self) -> Decimal {
        self.unit_tonnage * Decimal::from(self.planned_count)
    }
}
