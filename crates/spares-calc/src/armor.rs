//! 裝甲生成

use rust_decimal::Decimal;
use spares_core::part::is_same_armor;
use spares_core::quantity::scale_round;
use spares_core::{GeneratedPart, InstalledPart, PartDescriptor, PartKind, Unit};

/// 裝甲生成計算器
pub struct ArmorGenerator;

impl ArmorGenerator {
    /// 依名冊上的裝甲比例生成目標裝甲
    ///
    /// 目標噸數為 0 時不生成；名冊上沒有裝甲（總噸位為 0）時也不生成。
    pub fn generate_from_units(units: &[Unit], target_weight_tons: u32) -> Vec<GeneratedPart> {
        if target_weight_tons == 0 {
            return Vec::new();
        }

        let mounted: Vec<&InstalledPart> = units
            .iter()
            .flat_map(|unit| unit.acquirable_parts())
            .filter(|part| part.is_armor())
            .collect();

        Self::generate(&mounted, target_weight_tons)
    }

    /// 依給定裝甲生成
    pub fn generate(source: &[&InstalledPart], target_weight_tons: u32) -> Vec<GeneratedPart> {
        if target_weight_tons == 0 {
            return Vec::new();
        }

        let merged = Self::merge_identical_armor(source);
        let current_tonnage = merged
            .iter()
            .try_fold(Decimal::ZERO, |total, a| total.checked_add(a.tonnage))
            .unwrap_or(Decimal::MAX);

        if current_tonnage.is_zero() {
            tracing::warn!("名冊上沒有可縮放的裝甲，略過裝甲生成");
            return Vec::new();
        }

        // 現有噸位極小時倍數可能溢位，以 Decimal::MAX 計，點數再飽和到 u32::MAX
        let multiplier = Decimal::from(target_weight_tons)
            .checked_div(current_tonnage)
            .unwrap_or(Decimal::MAX);
        tracing::debug!(
            "裝甲生成：現有 {} 噸，目標 {} 噸，倍數 {}",
            current_tonnage,
            target_weight_tons,
            multiplier
        );

        merged
            .iter()
            .filter_map(|armor| match &armor.kind {
                PartKind::Armor(spec) => {
                    let points = scale_round(spec.points, multiplier);
                    Some(GeneratedPart::new(PartDescriptor::from_installed(armor), points))
                }
                _ => None,
            })
            .collect()
    }

    /// 合併相同的裝甲（累加點數）
    ///
    /// 使用 `is_same_armor`，比採購鍵寬鬆；結果為複本，不影響名冊。
    fn merge_identical_armor(source: &[&InstalledPart]) -> Vec<InstalledPart> {
        let mut merged: Vec<InstalledPart> = Vec::new();

        for armor in source.iter().filter(|p| p.is_armor()) {
            match merged.iter_mut().find(|m| is_same_armor(m, armor)) {
                Some(existing) => {
                    if let (PartKind::Armor(target), PartKind::Armor(extra)) =
                        (&mut existing.kind, &armor.kind)
                    {
                        target.points = target.points.saturating_add(extra.points);
                        existing.tonnage = target.tonnage();
                    }
                }
                None => merged.push((*armor).clone()),
            }
        }

        merged
    }
}
