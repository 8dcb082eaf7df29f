//! Dashboard statistics

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Admin dashboard totals
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
    #[serde(default)]
    pub total_customers: u64,
    #[serde(default)]
    pub total_menu_items: u64,
}

/// Per-customer dashboard totals
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub total_spent: Decimal,
    #[serde(default)]
    pub loyalty_points: u64,
    #[serde(default)]
    pub favorite_items: u64,
}
