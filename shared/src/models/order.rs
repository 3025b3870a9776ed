//! Order Model
//!
//! The order currently being served at an occupied table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Order item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    /// Price in currency unit (toman)
    pub unit_price: Decimal,
}

impl OrderItem {
    pub fn new(name: impl Into<String>, quantity: u32, unit_price: Decimal) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub items: Vec<OrderItem>,
    /// Sum of line totals, never negative
    pub total_amount: Decimal,
}

impl Order {
    /// Build an order and compute its total.
    ///
    /// Rejects empty item names, zero quantities and negative prices.
    pub fn new(items: Vec<OrderItem>) -> AppResult<Self> {
        for (idx, item) in items.iter().enumerate() {
            if item.name.trim().is_empty() {
                return Err(AppError::required("item name").with_detail("index", idx));
            }
            if item.quantity == 0 {
                return Err(
                    AppError::out_of_range("quantity", format!("{} has zero quantity", item.name))
                        .with_detail("index", idx),
                );
            }
            if item.unit_price.is_sign_negative() {
                return Err(AppError::out_of_range(
                    "unitPrice",
                    format!("{} has a negative price", item.name),
                )
                .with_detail("index", idx));
            }
        }
        let total_amount = items.iter().map(OrderItem::line_total).sum();
        Ok(Self {
            items,
            total_amount,
        })
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
