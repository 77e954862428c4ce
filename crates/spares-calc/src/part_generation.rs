//! 零件生成策略

use std::collections::HashMap;
use std::hash::Hash;

use rust_decimal::Decimal;
use spares_core::quantity::{scale_ceil, scale_round};
use spares_core::{
    GeneratedPart, GenerationOptions, InstalledPart, PartDescriptor, PartGenerationMethod, Unit,
};

/// 名冊上某類零件的出現統計
#[derive(Debug, Clone)]
pub struct PartOccurrence {
    pub descriptor: PartDescriptor,

    /// 出現次數（以庫存單位計）
    pub occurrences: u32,

    /// 攜帶此零件的單位數
    pub units_carrying: u32,
}

/// 零件生成計算器
pub struct PartGenerationCalculator;

impl PartGenerationCalculator {
    /// 應用生成策略
    ///
    /// `include_armor` / `include_ammunition` 決定裝甲與彈藥箱是否納入統計；
    /// 兩者有專用的生成器，主流程傳入 false。
    pub fn apply(
        units: &[Unit],
        options: &GenerationOptions,
        include_armor: bool,
        include_ammunition: bool,
    ) -> Vec<GeneratedPart> {
        let parts = match options.part_generation_method {
            PartGenerationMethod::Disabled => Vec::new(),
            PartGenerationMethod::Single => Self::single(&Self::collect_by_acquisition_key(
                units,
                include_armor,
                include_ammunition,
            )),
            PartGenerationMethod::Double => {
                Self::scaled(&Self::collect(units, include_armor, include_ammunition), 2)
            }
            PartGenerationMethod::Triple => {
                Self::scaled(&Self::collect(units, include_armor, include_ammunition), 3)
            }
            PartGenerationMethod::Custom => Self::custom(
                &Self::collect(units, include_armor, include_ammunition),
                options.custom_multiplier,
            ),
            PartGenerationMethod::Mishra => {
                Self::mishra(units, include_armor, include_ammunition)
            }
            PartGenerationMethod::Windchild => Self::windchild(
                &Self::collect_by_acquisition_key(units, include_armor, include_ammunition),
                options.windchild_unit_fraction,
            ),
        };

        tracing::debug!(
            "零件生成 {:?}：{} 種零件",
            options.part_generation_method,
            parts.len()
        );

        parts
    }

    /// 統計名冊上可採購零件的出現次數（依首次出現順序）
    pub fn collect(
        units: &[Unit],
        include_armor: bool,
        include_ammunition: bool,
    ) -> Vec<PartOccurrence> {
        Self::collect_grouped(
            units,
            include_armor,
            include_ammunition,
            InstalledPart::type_key,
            |_, _| true,
        )
    }

    /// 依採購鍵統計（損傷狀態與最低技能不同的同一零件算作一組）
    ///
    /// Single 與 Windchild 使用，每個採購鍵只得到一次下限。
    pub fn collect_by_acquisition_key(
        units: &[Unit],
        include_armor: bool,
        include_ammunition: bool,
    ) -> Vec<PartOccurrence> {
        Self::collect_grouped(
            units,
            include_armor,
            include_ammunition,
            InstalledPart::acquisition_key,
            |_, _| true,
        )
    }

    fn collect_grouped<K, KF, F>(
        units: &[Unit],
        include_armor: bool,
        include_ammunition: bool,
        key_of: KF,
        filter: F,
    ) -> Vec<PartOccurrence>
    where
        K: Hash + Eq,
        KF: Fn(&InstalledPart) -> K,
        F: Fn(&Unit, &InstalledPart) -> bool,
    {
        let mut index: HashMap<K, usize> = HashMap::new();
        let mut occurrences: Vec<PartOccurrence> = Vec::new();
        // 每組最後一次計入的單位，用於計算攜帶單位數
        let mut last_unit: Vec<usize> = Vec::new();

        for (unit_idx, unit) in units.iter().enumerate() {
            for part in unit.acquirable_parts() {
                if (part.is_armor() && !include_armor)
                    || (part.is_ammo_bin() && !include_ammunition)
                    || !filter(unit, part)
                {
                    continue;
                }

                let key = key_of(part);
                match index.get(&key) {
                    Some(&idx) => {
                        let entry = &mut occurrences[idx];
                        entry.occurrences = entry.occurrences.saturating_add(part.stock_units());
                        if last_unit[idx] != unit_idx {
                            entry.units_carrying += 1;
                            last_unit[idx] = unit_idx;
                        }
                    }
                    None => {
                        index.insert(key, occurrences.len());
                        occurrences.push(PartOccurrence {
                            descriptor: PartDescriptor::from_installed(part),
                            occurrences: part.stock_units(),
                            units_carrying: 1,
                        });
                        last_unit.push(unit_idx);
                    }
                }
            }
        }

        occurrences
    }

    /// 單件：每種零件 1 件
    fn single(occurrences: &[PartOccurrence]) -> Vec<GeneratedPart> {
        occurrences
            .iter()
            .map(|o| GeneratedPart::new(o.descriptor.clone(), 1))
            .collect()
    }

    /// 雙倍／三倍：出現次數 × 固定倍數
    fn scaled(occurrences: &[PartOccurrence], factor: u32) -> Vec<GeneratedPart> {
        occurrences
            .iter()
            .map(|o| GeneratedPart::new(o.descriptor.clone(), o.occurrences.saturating_mul(factor)))
            .collect()
    }

    /// 自訂：round(出現次數 × 倍數)
    fn custom(occurrences: &[PartOccurrence], multiplier: Decimal) -> Vec<GeneratedPart> {
        occurrences
            .iter()
            .map(|o| {
                GeneratedPart::new(o.descriptor.clone(), scale_round(o.occurrences, multiplier))
            })
            .collect()
    }

    /// Mishra：只看機甲上的零件，排除引擎，每次出現 1 件
    fn mishra(units: &[Unit], include_armor: bool, include_ammunition: bool) -> Vec<GeneratedPart> {
        let occurrences =
            Self::collect_grouped(
                units,
                include_armor,
                include_ammunition,
                InstalledPart::type_key,
                |unit, part| unit.is_mek() && !part.is_engine(),
            );
        Self::scaled(&occurrences, 1)
    }

    /// Windchild：max(1, ceil(攜帶單位數 × 比例))
    fn windchild(occurrences: &[PartOccurrence], fraction: Decimal) -> Vec<GeneratedPart> {
        occurrences
            .iter()
            .map(|o| {
                let quantity = scale_ceil(o.units_carrying, fraction).max(1);
                GeneratedPart::new(o.descriptor.clone(), quantity)
            })
            .collect()
    }
}
