//! # Spares
//!
//! 戰役備件庫存生成：依名冊與現有庫存建議應取得的零件、裝甲與彈藥。

pub use spares_calc as engine;
pub use spares_core as model;

pub use spares_calc::{
    generate_inventory, AcquisitionOrder, CommitMode, CommitPlan, CostBreakdown, InventoryGenerator,
    InventoryResult, InventoryWarning, WarningSeverity,
};
pub use spares_core::{
    AcquisitionKey, GeneratedLine, GenerationOptions, InMemoryStock, InventoryError,
    PartGenerationMethod, PriceList, PriceTable, StockLedger, StockSnapshot, Unit,
};
