//! 價格表

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::descriptor::{AcquisitionKey, PartDescriptor};

/// 定價函數：採購描述 × 數量 → 金額
pub trait PriceList {
    fn price(&self, descriptor: &PartDescriptor, quantity: u32) -> Decimal;
}

impl<F> PriceList for F
where
    F: Fn(&PartDescriptor, u32) -> Decimal,
{
    fn price(&self, descriptor: &PartDescriptor, quantity: u32) -> Decimal {
        self(descriptor, quantity)
    }
}

/// 依採購鍵的單價表，未登記的鍵價格為 0
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    unit_prices: HashMap<AcquisitionKey, Decimal>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置單價
    pub fn with_unit_price(mut self, key: AcquisitionKey, price: Decimal) -> Self {
        self.unit_prices.insert(key, price);
        self
    }

    /// 查詢單價
    pub fn unit_price(&self, key: &AcquisitionKey) -> Decimal {
        self.unit_prices.get(key).copied().unwrap_or(Decimal::ZERO)
    }
}

impl PriceList for PriceTable {
    fn price(&self, descriptor: &PartDescriptor, quantity: u32) -> Decimal {
        self.unit_price(&descriptor.acquisition_key()) * Decimal::from(quantity)
    }
}
