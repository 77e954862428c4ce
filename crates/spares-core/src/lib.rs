//! # Spares Core
//!
//! 備件庫存生成的核心資料模型與類型定義

pub mod config;
pub mod descriptor;
pub mod inventory;
pub mod part;
pub mod plan;
pub mod pricing;
pub mod quantity;
pub mod unit;

// Re-export 主要類型
pub use config::{
    GenerationOptions, PartGenerationMethod, MAX_CUSTOM_MULTIPLIER, MAX_WINDCHILD_UNIT_FRACTION,
};
pub use descriptor::{AcquisitionKey, DescriptorKind, GeneratedPart, PartDescriptor, StockCategory};
pub use inventory::{InMemoryStock, PartInUse, StockLedger, StockSnapshot};
pub use part::{
    AmmoBinSpec, AmmoCategory, AmmoType, ArmorSpec, ArmorType, InstalledPart, PartCategory,
    PartKind, PartTypeKey, Quality, TechBase,
};
pub use plan::GeneratedLine;
pub use pricing::{PriceList, PriceTable};
pub use unit::{Unit, UnitClass};

/// 庫存生成錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("無效的生成選項: {0}")]
    InvalidOption(String),

    #[error("找不到在用零件記錄: {0}")]
    MissingStockEntry(String),

    #[error("選項解析錯誤: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("計算錯誤: {0}")]
    CalculationError(String),
}

pub type Result<T> = std::result::Result<T, InventoryError>;
