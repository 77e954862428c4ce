//! 零件描述與採購鍵

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::part::{AmmoType, ArmorType, InstalledPart, PartCategory, PartKind, Quality, TechBase};

/// 採購鍵
///
/// 判斷兩個零件是否為「同一樣要買的東西」。合併、淨額計算與定價都以此為準，
/// 不使用顯示名稱。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AcquisitionKey {
    pub category: PartCategory,
    pub name: String,
    pub tech_base: TechBase,
    pub quality: Quality,
}

impl AcquisitionKey {
    pub fn new(
        category: PartCategory,
        name: impl Into<String>,
        tech_base: TechBase,
        quality: Quality,
    ) -> Self {
        Self {
            category,
            name: name.into(),
            tech_base,
            quality,
        }
    }
}

impl fmt::Display for AcquisitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tech = match self.tech_base {
            TechBase::InnerSphere => "IS",
            TechBase::Clan => "Clan",
        };
        write!(f, "{} [{:?}/{}/{:?}]", self.name, self.category, tech, self.quality)
    }
}

/// 描述種類
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DescriptorKind {
    /// 一般零件，以件計
    Part,
    /// 裝甲，以點數計
    Armor {
        armor_type: ArmorType,
        points_per_ton: Decimal,
    },
    /// 彈藥，以發數計
    Ammo { ammo: AmmoType },
}

/// 成本歸屬類別（對應三個付款開關）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockCategory {
    Parts,
    Armor,
    Ammunition,
}

/// 零件描述（由已安裝零件導出，之後不可變）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartDescriptor {
    pub name: String,
    pub category: PartCategory,
    pub tech_base: TechBase,
    pub quality: Quality,

    /// 每庫存單位重量（噸）
    pub unit_tonnage: Decimal,

    pub kind: DescriptorKind,
}

impl PartDescriptor {
    /// 從已安裝零件導出描述
    ///
    /// 彈藥箱導出的是箱內彈藥的描述。
    pub fn from_installed(part: &InstalledPart) -> Self {
        match &part.kind {
            PartKind::Armor(spec) => Self {
                name: spec.armor_type.display_name().to_string(),
                category: PartCategory::Armor,
                tech_base: part.tech_base,
                quality: part.quality,
                unit_tonnage: if spec.points_per_ton.is_zero() {
                    Decimal::ZERO
                } else {
                    Decimal::ONE.checked_div(spec.points_per_ton).unwrap_or(Decimal::MAX)
                },
                kind: DescriptorKind::Armor {
                    armor_type: spec.armor_type,
                    points_per_ton: spec.points_per_ton,
                },
            },
            PartKind::AmmoBin(spec) => Self {
                name: spec.ammo.name.clone(),
                category: PartCategory::AmmoStorage,
                tech_base: part.tech_base,
                quality: part.quality,
                unit_tonnage: spec.ammo.tonnage_per_shot(),
                kind: DescriptorKind::Ammo {
                    ammo: spec.ammo.clone(),
                },
            },
            _ => Self {
                name: part.name.clone(),
                category: part.category(),
                tech_base: part.tech_base,
                quality: part.quality,
                unit_tonnage: part.tonnage,
                kind: DescriptorKind::Part,
            },
        }
    }

    /// 採購鍵
    pub fn acquisition_key(&self) -> AcquisitionKey {
        AcquisitionKey::new(self.category, self.name.clone(), self.tech_base, self.quality)
    }

    /// 是否可以單獨採購（與 `InstalledPart::is_valid_for_acquisition` 一致）
    pub fn is_valid_for_acquisition(&self) -> bool {
        match &self.kind {
            DescriptorKind::Armor {
                armor_type,
                points_per_ton,
            } => *armor_type != ArmorType::Unknown && !points_per_ton.is_zero(),
            _ => !matches!(
                self.category,
                PartCategory::ChassisModification | PartCategory::StructuralIntegrity
            ),
        }
    }

    /// 成本歸屬類別
    pub fn stock_category(&self) -> StockCategory {
        match self.kind {
            DescriptorKind::Part => StockCategory::Parts,
            DescriptorKind::Armor { .. } => StockCategory::Armor,
            DescriptorKind::Ammo { .. } => StockCategory::Ammunition,
        }
    }

    /// 顯示用描述
    pub fn description(&self) -> String {
        match self.tech_base {
            TechBase::Clan => format!("{} (Clan, {:?})", self.name, self.quality),
            TechBase::InnerSphere => format!("{} ({:?})", self.name, self.quality),
        }
    }
}

/// 生成結果：零件描述 × 數量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPart {
    pub descriptor: PartDescriptor,
    pub quantity: u32,
}

impl GeneratedPart {
    pub fn new(descriptor: PartDescriptor, quantity: u32) -> Self {
        Self {
            descriptor,
            quantity,
        }
    }

    pub fn acquisition_key(&self) -> AcquisitionKey {
        self.descriptor.acquisition_key()
    }

    /// 總重量（噸）
    pub fn tonnage(&self) -> Decimal {
        self.descriptor.unit_tonnage * Decimal::from(self.quantity)
    }
}
