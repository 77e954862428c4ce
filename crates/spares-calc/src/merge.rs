//! 合併重複零件

use std::collections::HashMap;

use spares_core::{AcquisitionKey, GeneratedPart};

/// 合併計算器
pub struct MergeCalculator;

impl MergeCalculator {
    /// 依採購鍵合併，數量相加
    ///
    /// 其餘欄位取每組第一筆；輸出順序為各鍵首次出現的順序。
    pub fn merge(parts: Vec<GeneratedPart>) -> Vec<GeneratedPart> {
        let mut index: HashMap<AcquisitionKey, usize> = HashMap::new();
        let mut merged: Vec<GeneratedPart> = Vec::new();

        for part in parts {
            let key = part.acquisition_key();
            match index.get(&key) {
                Some(&idx) => {
                    let existing = &mut merged[idx];
                    existing.quantity = existing.quantity.saturating_add(part.quantity);
                }
                None => {
                    index.insert(key, merged.len());
                    merged.push(part);
                }
            }
        }

        merged
    }

    /// 過濾不可採購的結果後再合併
    pub fn merge_all(sources: impl IntoIterator<Item = Vec<GeneratedPart>>) -> Vec<GeneratedPart> {
        Self::merge(
            sources
                .into_iter()
                .flatten()
                .filter(|p| p.descriptor.is_valid_for_acquisition())
                .collect(),
        )
    }
}
