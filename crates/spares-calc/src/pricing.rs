//! 成本彙總

use rust_decimal::Decimal;
use spares_core::{GeneratedLine, GenerationOptions, PartDescriptor, PriceList, StockCategory};

/// 單位成本：以一個採購單位定價，不以合併後的目標數量定價
pub fn unit_cost<P: PriceList + ?Sized>(prices: &P, descriptor: &PartDescriptor) -> Decimal {
    prices.price(descriptor, 1)
}

/// 結果行總成本
pub fn total_cost(lines: &[GeneratedLine]) -> Decimal {
    lines.iter().map(GeneratedLine::total_cost).sum()
}

/// 依成本歸屬類別分開的成本
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CostBreakdown {
    pub parts: Decimal,
    pub armor: Decimal,
    pub ammunition: Decimal,
}

impl CostBreakdown {
    /// 彙總所有結果行
    pub fn from_lines(lines: &[GeneratedLine]) -> Self {
        Self::sum_lines(lines.iter())
    }

    /// 彙總給定的結果行
    pub fn sum_lines<'a>(lines: impl IntoIterator<Item = &'a GeneratedLine>) -> Self {
        let mut breakdown = Self::default();

        for line in lines {
            let cost = line.total_cost();
            match line.stock_category() {
                StockCategory::Parts => breakdown.parts += cost,
                StockCategory::Armor => breakdown.armor += cost,
                StockCategory::Ammunition => breakdown.ammunition += cost,
            }
        }

        breakdown
    }

    pub fn total(&self) -> Decimal {
        self.parts + self.armor + self.ammunition
    }

    /// 依三個付款開關計算應付金額
    pub fn payable(&self, options: &GenerationOptions) -> Decimal {
        let mut payable = Decimal::ZERO;
        if options.pay_for_parts {
            payable += self.parts;
        }
        if options.pay_for_armor {
            payable += self.armor;
        }
        if options.pay_for_ammunition {
            payable += self.ammunition;
        }
        payable
    }
}
