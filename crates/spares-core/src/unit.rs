//! 作戰單位模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::part::InstalledPart;

/// 單位類別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitClass {
    /// 戰鬥機甲
    Mek,
    /// 載具
    Vehicle,
    /// 航太戰機
    Aerospace,
    /// 戰鬥裝甲
    BattleArmor,
    ProtoMek,
    /// 傳統步兵
    Infantry,
}

/// 作戰單位
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    /// 單位ID
    pub id: Uuid,

    /// 單位名稱
    pub name: String,

    pub unit_class: UnitClass,

    /// 已安裝零件（依安裝順序）
    pub parts: Vec<InstalledPart>,
}

impl Unit {
    /// 創建新的單位
    pub fn new(name: impl Into<String>, unit_class: UnitClass) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            unit_class,
            parts: Vec::new(),
        }
    }

    /// 建構器模式：添加零件
    pub fn with_part(mut self, part: InstalledPart) -> Self {
        self.parts.push(part);
        self
    }

    /// 建構器模式：添加多個零件
    pub fn with_parts(mut self, parts: impl IntoIterator<Item = InstalledPart>) -> Self {
        self.parts.extend(parts);
        self
    }

    /// 添加零件
    pub fn add_part(&mut self, part: InstalledPart) {
        self.parts.push(part);
    }

    pub fn is_mek(&self) -> bool {
        self.unit_class == UnitClass::Mek
    }

    /// 可單獨採購的零件
    pub fn acquirable_parts(&self) -> impl Iterator<Item = &InstalledPart> {
        self.parts.iter().filter(|p| p.is_valid_for_acquisition())
    }
}
