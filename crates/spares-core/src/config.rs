//! 備件生成配置模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{InventoryError, Result};

/// 自訂倍數上限
pub const MAX_CUSTOM_MULTIPLIER: Decimal = Decimal::ONE_HUNDRED;

/// Windchild 單位比例上限（全部單位）
pub const MAX_WINDCHILD_UNIT_FRACTION: Decimal = Decimal::ONE;

/// 零件生成方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartGenerationMethod {
    /// 停用 - 不生成任何備件
    Disabled,

    /// 每種零件一件
    Single,

    /// 每次出現兩件
    Double,

    /// 每次出現三件
    Triple,

    /// 自訂倍數 - 出現次數 × 倍數，四捨五入
    Custom,

    /// 只針對機甲、排除引擎，每次出現一件
    Mishra,

    /// 依攜帶該零件的單位比例
    Windchild,
}

impl PartGenerationMethod {
    pub fn is_disabled(&self) -> bool {
        *self == PartGenerationMethod::Disabled
    }
}

/// 備件生成選項
///
/// 每次生成傳入一次，核心不會修改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// 零件生成方法
    pub part_generation_method: PartGenerationMethod,

    /// 目標裝甲總重（噸）
    pub target_armor_weight: u32,

    /// 是否生成備用彈藥
    pub generate_spare_ammunition: bool,

    /// 每件武器的重新裝填次數
    pub reloads_per_weapon: u32,

    /// 是否生成零散機槍彈藥（每箱固定 50 發）
    pub generate_fractional_machine_gun_ammunition: bool,

    /// 自訂方法的倍數（0 < 倍數 <= 100）
    pub custom_multiplier: Decimal,

    /// Windchild 方法的單位比例（0 < 比例 <= 1）
    pub windchild_unit_fraction: Decimal,

    /// 付款開關
    pub pay_for_parts: bool,
    pub pay_for_armor: bool,
    pub pay_for_ammunition: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self::new(PartGenerationMethod::Windchild)
    }
}

impl GenerationOptions {
    /// 創建新的生成選項（其餘為預設值）
    pub fn new(part_generation_method: PartGenerationMethod) -> Self {
        Self {
            part_generation_method,
            target_armor_weight: 60,
            generate_spare_ammunition: true,
            reloads_per_weapon: 4,
            generate_fractional_machine_gun_ammunition: true,
            custom_multiplier: Decimal::ONE,
            windchild_unit_fraction: Decimal::new(25, 2),
            pay_for_parts: true,
            pay_for_armor: true,
            pay_for_ammunition: true,
        }
    }

    /// 建構器模式：設置生成方法
    pub fn with_part_generation_method(mut self, method: PartGenerationMethod) -> Self {
        self.part_generation_method = method;
        self
    }

    /// 建構器模式：設置目標裝甲噸數
    pub fn with_target_armor_weight(mut self, tons: u32) -> Self {
        self.target_armor_weight = tons;
        self
    }

    /// 建構器模式：設置是否生成備用彈藥
    pub fn with_generate_spare_ammunition(mut self, generate: bool) -> Self {
        self.generate_spare_ammunition = generate;
        self
    }

    /// 建構器模式：設置重新裝填次數
    pub fn with_reloads_per_weapon(mut self, reloads: u32) -> Self {
        self.reloads_per_weapon = reloads;
        self
    }

    /// 建構器模式：設置是否生成零散機槍彈藥
    pub fn with_generate_fractional_machine_gun_ammunition(mut self, generate: bool) -> Self {
        self.generate_fractional_machine_gun_ammunition = generate;
        self
    }

    /// 建構器模式：設置自訂倍數
    pub fn with_custom_multiplier(mut self, multiplier: Decimal) -> Self {
        self.custom_multiplier = multiplier;
        self
    }

    /// 建構器模式：設置 Windchild 單位比例
    pub fn with_windchild_unit_fraction(mut self, fraction: Decimal) -> Self {
        self.windchild_unit_fraction = fraction;
        self
    }

    /// 建構器模式：設置付款開關（零件、裝甲、彈藥）
    pub fn with_payment(mut self, parts: bool, armor: bool, ammunition: bool) -> Self {
        self.pay_for_parts = parts;
        self.pay_for_armor = armor;
        self.pay_for_ammunition = ammunition;
        self
    }

    /// 關閉裝甲與彈藥生成，只保留零件策略
    pub fn parts_only(self) -> Self {
        self.with_target_armor_weight(0)
            .with_generate_spare_ammunition(false)
    }

    /// 檢查選項
    pub fn validate(&self) -> Result<()> {
        if self.custom_multiplier <= Decimal::ZERO {
            return Err(InventoryError::InvalidOption(format!(
                "自訂倍數必須為正數：{}",
                self.custom_multiplier
            )));
        }

        if self.custom_multiplier > MAX_CUSTOM_MULTIPLIER {
            return Err(InventoryError::InvalidOption(format!(
                "自訂倍數超過上限 {}：{}",
                MAX_CUSTOM_MULTIPLIER, self.custom_multiplier
            )));
        }

        if self.windchild_unit_fraction <= Decimal::ZERO {
            return Err(InventoryError::InvalidOption(format!(
                "Windchild 單位比例必須為正數：{}",
                self.windchild_unit_fraction
            )));
        }

        if self.windchild_unit_fraction > MAX_WINDCHILD_UNIT_FRACTION {
            return Err(InventoryError::InvalidOption(format!(
                "Windchild 單位比例不可超過 {}：{}",
                MAX_WINDCHILD_UNIT_FRACTION, self.windchild_unit_fraction
            )));
        }

        Ok(())
    }

    /// 是否需要生成裝甲
    pub fn wants_armor(&self) -> bool {
        self.target_armor_weight > 0
    }

    /// 是否需要生成彈藥
    pub fn wants_ammunition(&self) -> bool {
        self.generate_spare_ammunition
            && (self.reloads_per_weapon > 0 || self.generate_fractional_machine_gun_ammunition)
    }

    /// 從 JSON 讀取並檢查
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// 輸出為 JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
