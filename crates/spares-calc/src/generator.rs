//! 庫存生成主流程

use std::collections::HashMap;

use spares_core::{
    AcquisitionKey, GeneratedLine, GeneratedPart, GenerationOptions, PartInUse, PriceList,
    StockLedger, Unit,
};

use crate::ammunition::AmmunitionGenerator;
use crate::armor::ArmorGenerator;
use crate::merge::MergeCalculator;
use crate::netting::NettingCalculator;
use crate::part_generation::PartGenerationCalculator;
use crate::{pricing, InventoryResult, InventoryWarning};

/// 三個生成器各自的輸出（合併前）
#[derive(Debug, Clone, Default)]
pub struct GeneratorOutput {
    pub parts: Vec<GeneratedPart>,
    pub armor: Vec<GeneratedPart>,
    pub ammunition: Vec<GeneratedPart>,
}

/// 庫存生成器
pub struct InventoryGenerator {
    /// 生成選項（已檢查）
    options: GenerationOptions,
}

impl InventoryGenerator {
    /// 創建新的生成器，選項不合法時回傳錯誤
    pub fn new(options: GenerationOptions) -> spares_core::Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// 並行執行零件、裝甲、彈藥三個生成器
    ///
    /// 三者只讀名冊，各自回傳新的結果。
    pub fn run_generators(&self, roster: &[Unit]) -> GeneratorOutput {
        let options = &self.options;

        let (parts, (armor, ammunition)) = rayon::join(
            || PartGenerationCalculator::apply(roster, options, false, false),
            || {
                rayon::join(
                    || ArmorGenerator::generate_from_units(roster, options.target_armor_weight),
                    || AmmunitionGenerator::generate_with_options(roster, options),
                )
            },
        );

        GeneratorOutput {
            parts,
            armor,
            ammunition,
        }
    }

    /// 生成淨額計算前的結果行
    ///
    /// 計劃數量 = 合併後的目標數量；倉庫與轉運數量僅供顯示。
    pub fn generate_gross<S, P>(&self, roster: &[Unit], stock: &S, prices: &P) -> Vec<GeneratedLine>
    where
        S: StockLedger + ?Sized,
        P: PriceList + ?Sized,
    {
        let output = self.run_generators(roster);
        self.build_lines(roster, output, stock, prices)
    }

    /// 完整生成：生成、合併、建行、淨額計算
    pub fn generate<S, P>(
        &self,
        roster: &[Unit],
        stock: &S,
        prices: &P,
    ) -> spares_core::Result<InventoryResult>
    where
        S: StockLedger + ?Sized,
        P: PriceList + ?Sized,
    {
        tracing::info!(
            "開始庫存生成：單位 {} 個，策略 {:?}",
            roster.len(),
            self.options.part_generation_method
        );

        let start_time = std::time::Instant::now();
        let mut result = InventoryResult::empty();

        // Step 1-3: 三個生成器
        tracing::debug!("Step 1-3: 零件、裝甲、彈藥生成");
        let output = self.run_generators(roster);
        tracing::debug!(
            "零件 {} 行，裝甲 {} 行，彈藥 {} 行",
            output.parts.len(),
            output.armor.len(),
            output.ammunition.len()
        );

        for warning in self.check_output(roster, &output) {
            result.add_warning(warning);
        }

        // Step 4-6: 過濾、合併、建行
        tracing::debug!("Step 4-6: 過濾、合併、建立結果行");
        let gross = self.build_lines(roster, output, stock, prices);
        tracing::debug!("合併後 {} 行", gross.len());

        // Step 7: 淨額計算
        tracing::debug!("Step 7: 淨額計算");
        let parts_in_use = Self::register_parts_in_use(roster, &gross, stock);
        let netted = NettingCalculator::net(&gross, &parts_in_use)?;

        let covered = gross.len() - netted.len();
        if covered > 0 {
            result.add_warning(InventoryWarning::info(
                "netting".to_string(),
                format!("{} 種零件的庫存已足夠，不列入結果", covered),
            ));
        }

        result.lines = netted;
        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!("庫存生成完成，耗時 {:?}", start_time.elapsed());
        tracing::info!("結果行數量: {}", result.lines.len());

        Ok(result)
    }

    /// 過濾、合併並建立結果行
    fn build_lines<S, P>(
        &self,
        roster: &[Unit],
        output: GeneratorOutput,
        stock: &S,
        prices: &P,
    ) -> Vec<GeneratedLine>
    where
        S: StockLedger + ?Sized,
        P: PriceList + ?Sized,
    {
        let merged =
            MergeCalculator::merge_all([output.parts, output.armor, output.ammunition]);
        let use_counts = Self::count_in_use(roster);

        merged
            .into_iter()
            .map(|generated| {
                let key = generated.acquisition_key();
                let snapshot = stock.snapshot(&key).unwrap_or_default();
                let use_count = use_counts.get(&key).copied().unwrap_or(0);
                let unit_cost = pricing::unit_cost(prices, &generated.descriptor);

                GeneratedLine::new(generated.descriptor, generated.quantity, unit_cost)
                    .with_use_count(use_count)
                    .with_stock(&snapshot)
            })
            .collect()
    }

    /// 統計名冊上各採購鍵的安裝數量（庫存單位）
    pub fn count_in_use(roster: &[Unit]) -> HashMap<AcquisitionKey, u32> {
        let mut counts: HashMap<AcquisitionKey, u32> = HashMap::new();

        for part in roster.iter().flat_map(|unit| unit.acquirable_parts()) {
            let count = counts.entry(part.acquisition_key()).or_insert(0);
            *count = count.saturating_add(part.stock_units());
        }

        counts
    }

    /// 為每個結果行登記在用零件記錄
    ///
    /// 倉庫沒有記錄的鍵以零庫存登記。
    pub fn register_parts_in_use<S>(
        roster: &[Unit],
        lines: &[GeneratedLine],
        stock: &S,
    ) -> HashMap<AcquisitionKey, PartInUse>
    where
        S: StockLedger + ?Sized,
    {
        let use_counts = Self::count_in_use(roster);

        lines
            .iter()
            .map(|line| {
                let key = line.acquisition_key();
                let snapshot = stock.snapshot(&key).unwrap_or_default();
                let use_count = use_counts.get(&key).copied().unwrap_or(0);
                (key, PartInUse::new(&line.descriptor, use_count, snapshot))
            })
            .collect()
    }

    /// 檢查生成器輸出，產生提示
    fn check_output(&self, roster: &[Unit], output: &GeneratorOutput) -> Vec<InventoryWarning> {
        let mut warnings = Vec::new();

        if roster.is_empty() {
            warnings.push(InventoryWarning::info(
                "roster".to_string(),
                "名冊沒有任何單位".to_string(),
            ));
            return warnings;
        }

        if self.options.part_generation_method.is_disabled() {
            warnings.push(InventoryWarning::info(
                "parts".to_string(),
                "零件生成已停用".to_string(),
            ));
        }

        if self.options.wants_armor() && output.armor.is_empty() {
            warnings.push(InventoryWarning::warning(
                "armor".to_string(),
                format!(
                    "要求 {} 噸裝甲，但名冊上沒有可縮放的裝甲",
                    self.options.target_armor_weight
                ),
            ));
        }

        if self.options.wants_ammunition() && output.ammunition.is_empty() {
            warnings.push(InventoryWarning::info(
                "ammunition".to_string(),
                "名冊上沒有需要補充的彈藥箱".to_string(),
            ));
        }

        warnings
    }
}

/// 依選項從名冊生成庫存建議
pub fn generate_inventory<S, P>(
    options: &GenerationOptions,
    roster: &[Unit],
    stock: &S,
    prices: &P,
) -> spares_core::Result<Vec<GeneratedLine>>
where
    S: StockLedger + ?Sized,
    P: PriceList + ?Sized,
{
    let generator = InventoryGenerator::new(options.clone())?;
    Ok(generator.generate(roster, stock, prices)?.lines)
}
