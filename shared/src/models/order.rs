//! Order Model
//!
//! Storefront-side view of orders. The backend owns the order lifecycle;
//! these types only describe what is sent and what is read back.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fulfillment type chosen when placing an order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    /// Eat at the restaurant
    DineIn,
    /// Collect at the counter
    Takeaway,
    /// Bring to the customer
    Delivery,
}

impl OrderType {
    pub const ALL: [OrderType; 3] = [Self::DineIn, Self::Takeaway, Self::Delivery];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DineIn => "dine_in",
            Self::Takeaway => "takeaway",
            Self::Delivery => "delivery",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dine_in" => Ok(Self::DineIn),
            "takeaway" => Ok(Self::Takeaway),
            "delivery" => Ok(Self::Delivery),
            other => Err(format!("Invalid order type: {other}")),
        }
    }
}

/// Order submission payload (`POST /orders`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    pub restaurant_id: i64,
    pub customer_id: i64,
    pub menu_item_id: i64,
    /// Item price at selection time
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub order_type: OrderType,
}

/// Order status as reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Delivered,
    Canceled,
    /// Status string this client does not know about
    #[serde(untagged)]
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Delivered => "delivered",
            Self::Canceled => "canceled",
            Self::Other(s) => s,
        }
    }

    /// Whether the backend still accepts a cancellation
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order row as listed in the order-history and admin views
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: i64,
    pub restaurant_id: i64,
    #[serde(default)]
    pub restaurant_name: Option<String>,
    pub menu_item_id: i64,
    #[serde(default)]
    pub menu_item_name: Option<String>,
    #[serde(default)]
    pub menuitem_image_url: Option<String>,
    pub customer_id: i64,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub created_at: String,
}

/// Status change payload (`PATCH /orders/{id}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_type_wire_names() {
        assert_eq!(serde_json::to_value(OrderType::DineIn).unwrap(), json!("dine_in"));
        assert_eq!(serde_json::to_value(OrderType::Takeaway).unwrap(), json!("takeaway"));
        assert_eq!(serde_json::to_value(OrderType::Delivery).unwrap(), json!("delivery"));
        assert_eq!("delivery".parse::<OrderType>(), Ok(OrderType::Delivery));
        assert!("drive_thru".parse::<OrderType>().is_err());
    }

    #[test]
    fn test_payload_serializes_amount_as_number() {
        let payload = OrderPayload {
            restaurant_id: 2,
            customer_id: 9,
            menu_item_id: 4,
            total_amount: Decimal::new(1050, 2),
            order_type: OrderType::Takeaway,
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "restaurant_id": 2,
                "customer_id": 9,
                "menu_item_id": 4,
                "total_amount": 10.5,
                "order_type": "takeaway"
            })
        );
    }

    #[test]
    fn test_unknown_status_preserved() {
        let status: OrderStatus = serde_json::from_value(json!("in_transit")).unwrap();
        assert_eq!(status, OrderStatus::Other("in_transit".into()));
        assert_eq!(status.to_string(), "in_transit");
        assert!(!status.is_open());

        let known: OrderStatus = serde_json::from_value(json!("pending")).unwrap();
        assert_eq!(known, OrderStatus::Pending);
        assert!(known.is_open());
    }

    #[test]
    fn test_parse_order_record() {
        let record: OrderRecord = serde_json::from_value(json!({
            "order_id": 31,
            "restaurant_id": 1,
            "restaurant_name": "Mathe's Eatery",
            "menu_item_id": 4,
            "menu_item_name": "Pasta Carbonara",
            "customer_id": 9,
            "total_amount": 24.5,
            "order_type": "dine_in",
            "status": "confirmed",
            "created_at": "2025-11-14T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(record.order_id, 31);
        assert_eq!(record.status, OrderStatus::Confirmed);
        assert_eq!(record.customer_email, None);
        assert_eq!(record.total_amount, Decimal::new(245, 1));
    }
}
