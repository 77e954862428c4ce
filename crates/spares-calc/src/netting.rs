//! 淨額計算（扣除現有庫存）

use std::collections::HashMap;

use spares_core::{AcquisitionKey, GeneratedLine, InventoryError, PartInUse};

/// 淨額計算器
pub struct NettingCalculator;

impl NettingCalculator {
    /// 依在用零件記錄扣除倉庫與轉運數量
    ///
    /// 計劃數量 = 目標數量 - 倉庫數量 - 轉運數量，結果 ≤ 0 的行被移除。
    /// 每個結果行的採購鍵都必須已登記在 `parts_in_use` 中，否則回傳
    /// `InventoryError::MissingStockEntry`。
    pub fn net(
        lines: &[GeneratedLine],
        parts_in_use: &HashMap<AcquisitionKey, PartInUse>,
    ) -> spares_core::Result<Vec<GeneratedLine>> {
        let mut netted = Vec::with_capacity(lines.len());

        for line in lines {
            let key = line.acquisition_key();
            let in_use = parts_in_use
                .get(&key)
                .ok_or_else(|| InventoryError::MissingStockEntry(key.to_string()))?;

            let requirement = line.net_requirement(&in_use.stock);
            if requirement <= 0 {
                tracing::debug!("{} 庫存已足夠（淨需求 {}），移除", key, requirement);
                continue;
            }

            let planned = u32::try_from(requirement).map_err(|_| {
                InventoryError::CalculationError(format!("{} 淨需求超出範圍: {}", key, requirement))
            })?;

            netted.push(line.with_planned_count(planned));
        }

        tracing::debug!("淨額計算：{} 行 → {} 行", lines.len(), netted.len());

        Ok(netted)
    }
}
