//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Menu item as served by the catalog endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "menu_item_id")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Classification label, absent for uncategorised items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(rename = "menuitem_image_url", default)]
    pub image_url: String,
    pub is_available: bool,
    /// Remaining stock; `None` means the item is not stock-tracked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Estimated preparation time in minutes
    #[serde(
        rename = "prep_time",
        default,
        deserialize_with = "deserialize_prep_minutes",
        skip_serializing_if = "Option::is_none"
    )]
    pub prep_time_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<i64>,
}

impl MenuItem {
    /// Sellable right now: vendor flag set and, when stock-tracked, at least one left.
    pub fn is_orderable(&self) -> bool {
        self.is_available && self.quantity.is_none_or(|q| q >= 1)
    }

    /// Whether the item carries a non-empty category label
    pub fn category(&self) -> Option<&str> {
        self.category_name.as_deref().filter(|c| !c.is_empty())
    }
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub is_available: bool,
    #[serde(rename = "menuitem_image_url")]
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<i64>,
}

/// Update menu item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(rename = "menuitem_image_url", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

/// `prep_time` arrives either as minutes or as text such as `"15 mins"`.
fn deserialize_prep_minutes<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Minutes(u32),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Minutes(m)) => Some(m),
        Some(Raw::Text(s)) => {
            let digits: String = s
                .trim_start()
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect();
            digits.parse().ok()
        }
        Some(Raw::Other(_)) | None => None,
    })
}
