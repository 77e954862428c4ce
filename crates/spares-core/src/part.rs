//! 已安裝零件模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::descriptor::AcquisitionKey;

/// 零件類別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PartCategory {
    Weapon,
    Equipment,
    HeatSink,
    JumpJet,
    Actuator,
    Engine,
    Gyro,
    Cockpit,
    Sensor,
    LifeSupport,
    /// 底盤改裝（與底盤一體，不可單獨採購）
    ChassisModification,
    /// 結構完整性（非實體零件）
    StructuralIntegrity,
    Armor,
    AmmoBin,
    /// 彈藥存貨（彈藥箱實際採購的對象）
    AmmoStorage,
}

/// 技術基礎（兼作氏族標記）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TechBase {
    InnerSphere,
    Clan,
}

impl TechBase {
    pub fn is_clan(&self) -> bool {
        *self == TechBase::Clan
    }
}

/// 品質等級（A 最差，F 最佳）
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Quality {
    A,
    B,
    C,
    #[default]
    D,
    E,
    F,
}

/// 裝甲子類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ArmorType {
    Standard,
    FerroFibrous,
    LightFerroFibrous,
    HeavyFerroFibrous,
    Stealth,
    Reactive,
    Reflective,
    Hardened,
    /// 零點佔位裝甲（步兵、野戰炮）
    Unknown,
}

impl ArmorType {
    /// 顯示名稱
    pub fn display_name(&self) -> &'static str {
        match self {
            ArmorType::Standard => "Standard Armor",
            ArmorType::FerroFibrous => "Ferro-Fibrous Armor",
            ArmorType::LightFerroFibrous => "Light Ferro-Fibrous Armor",
            ArmorType::HeavyFerroFibrous => "Heavy Ferro-Fibrous Armor",
            ArmorType::Stealth => "Stealth Armor",
            ArmorType::Reactive => "Reactive Armor",
            ArmorType::Reflective => "Reflective Armor",
            ArmorType::Hardened => "Hardened Armor",
            ArmorType::Unknown => "Unknown Armor",
        }
    }
}

/// 裝甲規格
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorSpec {
    pub armor_type: ArmorType,

    /// 裝甲點數
    pub points: u32,

    /// 每噸裝甲點數
    pub points_per_ton: Decimal,
}

impl ArmorSpec {
    /// 裝甲噸位 = 點數 / 每噸點數，溢位時取 `Decimal::MAX`
    pub fn tonnage(&self) -> Decimal {
        if self.points_per_ton.is_zero() {
            return Decimal::ZERO;
        }
        Decimal::from(self.points)
            .checked_div(self.points_per_ton)
            .unwrap_or(Decimal::MAX)
    }
}

/// 彈藥大類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AmmoCategory {
    MachineGun,
    LightMachineGun,
    HeavyMachineGun,
    Autocannon,
    Missile,
    Gauss,
    Artillery,
    Other,
}

impl AmmoCategory {
    /// 是否為機槍彈藥（輕、標準、重）
    pub fn is_machine_gun(&self) -> bool {
        matches!(
            self,
            AmmoCategory::MachineGun | AmmoCategory::LightMachineGun | AmmoCategory::HeavyMachineGun
        )
    }
}

/// 彈藥類型
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AmmoType {
    /// 彈藥名稱（例如 "LRM 10 Ammo"）
    pub name: String,

    pub category: AmmoCategory,

    /// 每噸發數
    pub shots_per_ton: u32,
}

impl AmmoType {
    pub fn new(name: impl Into<String>, category: AmmoCategory, shots_per_ton: u32) -> Self {
        Self {
            name: name.into(),
            category,
            shots_per_ton,
        }
    }

    /// 每發噸位
    pub fn tonnage_per_shot(&self) -> Decimal {
        if self.shots_per_ton == 0 {
            return Decimal::ZERO;
        }
        Decimal::ONE / Decimal::from(self.shots_per_ton)
    }
}

/// 彈藥箱規格
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmmoBinSpec {
    pub ammo: AmmoType,

    /// 滿箱發數
    pub full_shots: u32,
}

/// 零件種類
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartKind {
    /// 一般組件
    Component(PartCategory),
    Armor(ArmorSpec),
    AmmoBin(AmmoBinSpec),
    StructuralIntegrity,
}

/// 單位上安裝的零件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstalledPart {
    /// 零件名稱
    pub name: String,

    pub kind: PartKind,

    pub tech_base: TechBase,

    pub quality: Quality,

    /// 損傷次數
    pub hits: u32,

    /// 修理所需最低技能
    pub skill_min: i32,

    /// 單件重量（噸）
    pub tonnage: Decimal,
}

impl InstalledPart {
    fn new(name: String, kind: PartKind, tonnage: Decimal) -> Self {
        Self {
            name,
            kind,
            tech_base: TechBase::InnerSphere,
            quality: Quality::default(),
            hits: 0,
            skill_min: 0,
            tonnage,
        }
    }

    /// 創建一般組件
    pub fn component(name: impl Into<String>, category: PartCategory, tonnage: Decimal) -> Self {
        Self::new(name.into(), PartKind::Component(category), tonnage)
    }

    /// 創建裝甲
    pub fn armor(armor_type: ArmorType, points: u32, points_per_ton: Decimal) -> Self {
        let spec = ArmorSpec {
            armor_type,
            points,
            points_per_ton,
        };
        let tonnage = spec.tonnage();
        Self::new(armor_type.display_name().to_string(), PartKind::Armor(spec), tonnage)
    }

    /// 創建彈藥箱
    pub fn ammo_bin(ammo: AmmoType, full_shots: u32) -> Self {
        let name = format!("{} Bin", ammo.name);
        let tonnage = ammo.tonnage_per_shot() * Decimal::from(full_shots);
        Self::new(name, PartKind::AmmoBin(AmmoBinSpec { ammo, full_shots }), tonnage)
    }

    /// 創建結構完整性
    pub fn structural_integrity() -> Self {
        Self::new(
            "Structural Integrity".to_string(),
            PartKind::StructuralIntegrity,
            Decimal::ZERO,
        )
    }

    /// 建構器模式：設置技術基礎
    pub fn with_tech_base(mut self, tech_base: TechBase) -> Self {
        self.tech_base = tech_base;
        self
    }

    /// 建構器模式：設置品質
    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = quality;
        self
    }

    /// 建構器模式：設置損傷次數
    pub fn with_hits(mut self, hits: u32) -> Self {
        self.hits = hits;
        self
    }

    /// 建構器模式：設置最低技能
    pub fn with_skill_min(mut self, skill_min: i32) -> Self {
        self.skill_min = skill_min;
        self
    }

    /// 零件類別
    pub fn category(&self) -> PartCategory {
        match &self.kind {
            PartKind::Component(category) => *category,
            PartKind::Armor(_) => PartCategory::Armor,
            PartKind::AmmoBin(_) => PartCategory::AmmoBin,
            PartKind::StructuralIntegrity => PartCategory::StructuralIntegrity,
        }
    }

    pub fn is_armor(&self) -> bool {
        matches!(self.kind, PartKind::Armor(_))
    }

    pub fn is_ammo_bin(&self) -> bool {
        matches!(self.kind, PartKind::AmmoBin(_))
    }

    pub fn is_engine(&self) -> bool {
        self.kind == PartKind::Component(PartCategory::Engine)
    }

    /// 是否可以單獨採購
    ///
    /// 排除：
    /// - 結構完整性（不是真正的零件）
    /// - 未知類型或每噸點數為 0 的裝甲（步兵、野戰炮上的零點裝甲）
    /// - 底盤改裝（必須隨底盤購買）
    pub fn is_valid_for_acquisition(&self) -> bool {
        match &self.kind {
            PartKind::StructuralIntegrity => false,
            PartKind::Armor(spec) => {
                spec.armor_type != ArmorType::Unknown && !spec.points_per_ton.is_zero()
            }
            PartKind::Component(category) => !matches!(
                category,
                PartCategory::ChassisModification | PartCategory::StructuralIntegrity
            ),
            PartKind::AmmoBin(_) => true,
        }
    }

    /// 採購鍵（嚴格身分，用於合併、淨額計算與定價）
    pub fn acquisition_key(&self) -> AcquisitionKey {
        match &self.kind {
            PartKind::Armor(spec) => AcquisitionKey::new(
                PartCategory::Armor,
                spec.armor_type.display_name(),
                self.tech_base,
                self.quality,
            ),
            // 彈藥箱本身不可採購，採購的是箱內彈藥
            PartKind::AmmoBin(spec) => AcquisitionKey::new(
                PartCategory::AmmoStorage,
                spec.ammo.name.clone(),
                self.tech_base,
                self.quality,
            ),
            _ => AcquisitionKey::new(self.category(), self.name.clone(), self.tech_base, self.quality),
        }
    }

    /// 零件類型鍵（策略分組用）
    pub fn type_key(&self) -> PartTypeKey {
        PartTypeKey {
            acquisition: self.acquisition_key(),
            hits: self.hits,
            skill_min: self.skill_min,
        }
    }

    /// 以庫存單位計的數量：組件 1 件、裝甲以點數、彈藥以發數
    pub fn stock_units(&self) -> u32 {
        match &self.kind {
            PartKind::Armor(spec) => spec.points,
            PartKind::AmmoBin(spec) => spec.full_shots,
            _ => 1,
        }
    }
}

/// 零件類型鍵
///
/// 類別、技術基礎、品質、損傷狀態與最低技能全部相同才算同一類型。
/// 與策略無關。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartTypeKey {
    pub acquisition: AcquisitionKey,
    pub hits: u32,
    pub skill_min: i32,
}

/// 裝甲預合併用的比較
///
/// 比採購鍵寬鬆：只看裝甲子類型、氏族標記、品質、損傷與最低技能，
/// 不比較名稱與重量。非裝甲一律回傳 false。
pub fn is_same_armor(a: &InstalledPart, b: &InstalledPart) -> bool {
    match (&a.kind, &b.kind) {
        (PartKind::Armor(sa), PartKind::Armor(sb)) => {
            sa.armor_type == sb.armor_type
                && a.tech_base.is_clan() == b.tech_base.is_clan()
                && a.quality == b.quality
                && a.hits == b.hits
                && a.skill_min == b.skill_min
        }
        _ => false,
    }
}
