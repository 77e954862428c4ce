//! # Spares Calculation Engine
//!
//! 備件庫存生成引擎

pub mod ammunition;
pub mod armor;
pub mod commit;
pub mod generator;
pub mod merge;
pub mod netting;
pub mod part_generation;
pub mod pricing;

#[cfg(test)]
mod properties;

// Re-export 主要類型
pub use commit::{AcquisitionOrder, CommitMode, CommitPlan};
pub use generator::{generate_inventory, GeneratorOutput, InventoryGenerator};
pub use pricing::CostBreakdown;

/// 庫存生成結果
#[derive(Debug, Clone)]
pub struct InventoryResult {
    /// 淨額計算後仍需取得的結果行
    pub lines: Vec<spares_core::GeneratedLine>,

    /// 警告信息
    pub warnings: Vec<InventoryWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl InventoryResult {
    /// 創建空的生成結果
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            warnings: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: InventoryWarning) {
        self.warnings.push(warning);
    }

    /// 成本彙總
    pub fn costs(&self) -> CostBreakdown {
        CostBreakdown::from_lines(&self.lines)
    }
}

/// 生成警告
#[derive(Debug, Clone)]
pub struct InventoryWarning {
    pub subject: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl InventoryWarning {
    pub fn new(subject: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            subject,
            message,
            severity,
        }
    }

    pub fn info(subject: String, message: String) -> Self {
        Self::new(subject, message, WarningSeverity::Info)
    }

    pub fn warning(subject: String, message: String) -> Self {
        Self::new(subject, message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Info,
    Warning,
}
