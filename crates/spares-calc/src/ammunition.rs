//! 彈藥生成

use spares_core::{GeneratedPart, GenerationOptions, InstalledPart, PartDescriptor, PartKind, Unit};

/// 零散機槍彈藥每箱固定發數
pub const FRACTIONAL_MACHINE_GUN_ROUNDS: u32 = 50;

/// 彈藥生成計算器
pub struct AmmunitionGenerator;

impl AmmunitionGenerator {
    /// 依選項從名冊生成彈藥
    pub fn generate_with_options(units: &[Unit], options: &GenerationOptions) -> Vec<GeneratedPart> {
        Self::generate_from_units(
            units,
            options.generate_spare_ammunition,
            options.generate_fractional_machine_gun_ammunition,
            options.reloads_per_weapon,
        )
    }

    /// 從名冊上所有彈藥箱生成彈藥
    pub fn generate_from_units(
        units: &[Unit],
        generate_spare: bool,
        generate_fractional_machine_gun: bool,
        reloads_per_weapon: u32,
    ) -> Vec<GeneratedPart> {
        let bins: Vec<&InstalledPart> = units
            .iter()
            .flat_map(|unit| unit.parts.iter())
            .filter(|part| part.is_ammo_bin())
            .collect();

        Self::generate(&bins, generate_spare, generate_fractional_machine_gun, reloads_per_weapon)
    }

    /// 從給定彈藥箱生成彈藥
    ///
    /// 每個彈藥箱輸出一行，尚未合併：
    /// - 機槍彈藥且開啟零散機槍彈藥：固定 50 發（優先，不重複輸出）
    /// - 否則若重新裝填次數 > 0：滿箱發數 × 重新裝填次數
    pub fn generate(
        bins: &[&InstalledPart],
        generate_spare: bool,
        generate_fractional_machine_gun: bool,
        reloads_per_weapon: u32,
    ) -> Vec<GeneratedPart> {
        if !generate_spare || (reloads_per_weapon == 0 && !generate_fractional_machine_gun) {
            return Vec::new();
        }

        let mut ammunition = Vec::new();

        for bin in bins {
            let PartKind::AmmoBin(spec) = &bin.kind else {
                continue;
            };

            let rounds = if generate_fractional_machine_gun && spec.ammo.category.is_machine_gun() {
                FRACTIONAL_MACHINE_GUN_ROUNDS
            } else if reloads_per_weapon > 0 {
                spec.full_shots.saturating_mul(reloads_per_weapon)
            } else {
                continue;
            };

            ammunition.push(GeneratedPart::new(PartDescriptor::from_installed(bin), rounds));
        }

        tracing::debug!("彈藥生成：{} 個彈藥箱，{} 行", bins.len(), ammunition.len());

        ammunition
    }
}
