//! 提交規劃
//!
//! 把使用者接受的結果行轉成入庫或下單的批次。本模組不修改倉庫，
//! 由呼叫端一次套用整個批次。

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use spares_core::{AcquisitionKey, GeneratedLine, GenerationOptions};
use uuid::Uuid;

use crate::pricing::CostBreakdown;

/// 提交方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommitMode {
    /// 直接加入倉庫
    AddToStock,
    /// 加入採購清單
    Order,
}

/// 採購項目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcquisitionOrder {
    /// 來源結果行ID
    pub line_id: Uuid,

    pub key: AcquisitionKey,

    pub description: String,

    /// 數量（庫存單位）
    pub quantity: u32,

    /// 單位成本
    pub unit_cost: Decimal,

    /// 申請日期
    pub requested_on: NaiveDate,
}

impl AcquisitionOrder {
    /// 從結果行創建採購項目
    pub fn from_line(line: &GeneratedLine, requested_on: NaiveDate) -> Self {
        Self {
            line_id: line.id,
            key: line.acquisition_key(),
            description: line.description.clone(),
            quantity: line.planned_count,
            unit_cost: line.unit_cost,
            requested_on,
        }
    }

    pub fn total_cost(&self) -> Decimal {
        self.unit_cost * Decimal::from(self.quantity)
    }
}

/// 提交批次
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitPlan {
    pub mode: CommitMode,

    pub items: Vec<AcquisitionOrder>,

    /// 接受行的成本（未套用付款開關）
    pub cost: Decimal,

    /// 依付款開關應從帳戶扣除的金額
    pub debit: Decimal,
}

impl CommitPlan {
    /// 依接受的結果行建立提交批次
    ///
    /// 只有 `should_acquire` 為 true 且計劃數量 > 0 的行會被納入。
    pub fn build(
        lines: &[GeneratedLine],
        mode: CommitMode,
        options: &GenerationOptions,
        requested_on: NaiveDate,
    ) -> Self {
        let accepted: Vec<&GeneratedLine> = lines
            .iter()
            .filter(|line| line.should_acquire && line.planned_count > 0)
            .collect();

        let breakdown = CostBreakdown::sum_lines(accepted.iter().copied());
        let items: Vec<AcquisitionOrder> = accepted
            .iter()
            .map(|line| AcquisitionOrder::from_line(line, requested_on))
            .collect();

        tracing::info!(
            "提交規劃 {:?}：{} 行中接受 {} 行，扣款 {}",
            mode,
            lines.len(),
            items.len(),
            breakdown.payable(options)
        );

        Self {
            mode,
            items,
            cost: breakdown.total(),
            debit: breakdown.payable(options),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 總數量
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}
