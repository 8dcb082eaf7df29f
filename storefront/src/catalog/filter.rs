//! Catalog filtering and sorting
//!
//! Pure functions over an in-memory menu. Inputs are never mutated; each
//! call derives a fresh list.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use icu_collator::{Collator, CollatorOptions, Strength};
use serde::{Deserialize, Serialize};
use shared::MenuItem;

/// Category sentinel that matches every item
pub const ALL_CATEGORIES: &str = "All";

/// Selected category
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Exact match on `category_name`
    Named(String),
}

impl CategoryFilter {
    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => item.category_name.as_deref() == Some(name.as_str()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Named(name) => name,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Named(label.to_string())
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(label: String) -> Self {
        if label == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Named(label)
        }
    }
}

/// Ordering of the visible list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "name")]
    NameAscending,
    #[serde(rename = "price-low")]
    PriceAscending,
    #[serde(rename = "price-high")]
    PriceDescending,
    /// Highest rated first; unrated items count as 0
    #[serde(rename = "rating")]
    RatingDescending,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NameAscending => "name",
            Self::PriceAscending => "price-low",
            Self::PriceDescending => "price-high",
            Self::RatingDescending => "rating",
        }
    }

    fn compare(&self, a: &MenuItem, b: &MenuItem, collator: Option<&Collator>) -> Ordering {
        match self {
            Self::NameAscending => compare_names(collator, &a.name, &b.name),
            Self::PriceAscending => a.price.cmp(&b.price),
            Self::PriceDescending => b.price.cmp(&a.price),
            Self::RatingDescending => b
                .rating
                .unwrap_or(0.0)
                .total_cmp(&a.rating.unwrap_or(0.0)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::NameAscending),
            "price-low" => Ok(Self::PriceAscending),
            "price-high" => Ok(Self::PriceDescending),
            "rating" => Ok(Self::RatingDescending),
            other => Err(format!("Invalid sort key: {other}")),
        }
    }
}

/// User-controlled filter state of the menu view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring of name or description; not trimmed
    pub search_text: String,
    pub category: CategoryFilter,
    /// Hide items whose vendor flag is off
    pub available_only: bool,
    pub sort_key: SortKey,
}

impl FilterCriteria {
    pub fn matches(&self, item: &MenuItem) -> bool {
        self.matches_with_needle(item, &self.search_text.to_lowercase())
    }

    fn matches_with_needle(&self, item: &MenuItem, needle: &str) -> bool {
        let matches_search = needle.is_empty()
            || item.name.to_lowercase().contains(needle)
            || item.description.to_lowercase().contains(needle);

        matches_search
            && self.category.matches(item)
            && (!self.available_only || item.is_available)
    }
}

/// Filter then sort `raw` according to `criteria`.
///
/// The sort is stable: items with equal keys keep their catalog order.
pub fn derive_visible_items(raw: &[MenuItem], criteria: &FilterCriteria) -> Vec<MenuItem> {
    let needle = criteria.search_text.to_lowercase();
    let mut visible: Vec<MenuItem> = raw
        .iter()
        .filter(|item| criteria.matches_with_needle(item, &needle))
        .cloned()
        .collect();

    let collator = match criteria.sort_key {
        SortKey::NameAscending => name_collator(),
        _ => None,
    };
    visible.sort_by(|a, b| criteria.sort_key.compare(a, b, collator.as_ref()));
    visible
}

/// `"All"` followed by each distinct non-empty category in first-seen order.
pub fn derive_category_options(raw: &[MenuItem]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::from([ALL_CATEGORIES]);
    let mut options = vec![ALL_CATEGORIES.to_string()];

    for category in raw.iter().filter_map(MenuItem::category) {
        if seen.insert(category) {
            options.push(category.to_string());
        }
    }
    options
}

/// Root-locale collator at tertiary strength: accents and case only break
/// ties between otherwise equal names, lowercase first.
fn name_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            tracing::warn!(error = %e, "name collator unavailable, falling back to case-folded order");
            None
        }
    }
}

fn compare_names(collator: Option<&Collator>, a: &str, b: &str) -> Ordering {
    match collator {
        Some(collator) => collator.compare(a, b),
        None => a
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase))
            .then_with(|| b.cmp(a)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::menu_item;
    use rust_decimal::Decimal;

    fn names(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_name_ascending() {
        let items = vec![menu_item(1, "Zebra Cake", 10), menu_item(2, "Apple Pie", 5)];
        let visible = derive_visible_items(&items, &FilterCriteria::default());
        assert_eq!(names(&visible), ["Apple Pie", "Zebra Cake"]);
    }

    #[test]
    fn test_name_compare_ignores_case() {
        let items = vec![
            menu_item(1, "banana split", 1),
            menu_item(2, "Apple Pie", 1),
            menu_item(3, "Cherry Tart", 1),
        ];
        let visible = derive_visible_items(&items, &FilterCriteria::default());
        assert_eq!(names(&visible), ["Apple Pie", "banana split", "Cherry Tart"]);
    }

    #[test]
    fn test_name_case_only_difference_lowercase_first() {
        let items = vec![menu_item(1, "Tea", 1), menu_item(2, "tea", 1)];
        let visible = derive_visible_items(&items, &FilterCriteria::default());
        assert_eq!(names(&visible), ["tea", "Tea"]);
    }

    #[test]
    fn test_name_sort_collates_accents() {
        let items = vec![
            menu_item(1, "Fudge", 1),
            menu_item(2, "Éclair", 1),
            menu_item(3, "Crepe", 1),
            menu_item(4, "Crème brûlée", 1),
        ];
        let visible = derive_visible_items(&items, &FilterCriteria::default());
        assert_eq!(names(&visible), ["Crème brûlée", "Crepe", "Éclair", "Fudge"]);
    }

    #[test]
    fn test_name_fallback_without_collator() {
        assert_eq!(compare_names(None, "tea", "Tea"), Ordering::Less);
        assert_eq!(compare_names(None, "apple", "Banana"), Ordering::Less);
    }

    #[test]
    fn test_search_matches_name_or_description() {
        let mut vanilla = menu_item(2, "Vanilla Cake", 8);
        vanilla.description = "Light sponge".into();
        let mut brownie = menu_item(3, "Brownie", 4);
        brownie.description = "Dark CHOCOLATE square".into();
        let items = vec![menu_item(1, "Chocolate Cake", 9), vanilla, brownie];

        let criteria = FilterCriteria {
            search_text: "choc".into(),
            ..Default::default()
        };
        let visible = derive_visible_items(&items, &criteria);
        assert_eq!(names(&visible), ["Brownie", "Chocolate Cake"]);
    }

    #[test]
    fn test_whitespace_search_is_not_trimmed() {
        let items = vec![menu_item(1, "Chocolate Cake", 9), menu_item(2, "Tea", 2)];
        let criteria = FilterCriteria {
            search_text: " ".into(),
            ..Default::default()
        };
        let visible = derive_visible_items(&items, &criteria);
        assert_eq!(names(&visible), ["Chocolate Cake"]);
    }

    #[test]
    fn test_category_filter() {
        let mut cake = menu_item(1, "Cake", 5);
        cake.category_name = Some("Desserts".into());
        let mut soup = menu_item(2, "Soup", 4);
        soup.category_name = Some("Starters".into());
        let loose = menu_item(3, "Bread", 1);
        let items = vec![cake, soup, loose];

        let desserts = FilterCriteria {
            category: "Desserts".into(),
            ..Default::default()
        };
        assert_eq!(names(&derive_visible_items(&items, &desserts)), ["Cake"]);

        let all = FilterCriteria {
            category: "All".into(),
            ..Default::default()
        };
        assert_eq!(derive_visible_items(&items, &all).len(), 3);
    }

    #[test]
    fn test_available_only_uses_vendor_flag() {
        let mut sold_out_flag = menu_item(1, "Pie", 5);
        sold_out_flag.is_available = false;
        let mut no_stock = menu_item(2, "Stew", 5);
        no_stock.quantity = Some(0);
        let items = vec![sold_out_flag, no_stock];

        let criteria = FilterCriteria {
            available_only: true,
            ..Default::default()
        };
        // Stock is not consulted here, only the flag
        assert_eq!(names(&derive_visible_items(&items, &criteria)), ["Stew"]);
        assert_eq!(derive_category_options(&items), ["All"]);
    }

    #[test]
    fn test_price_sorts_are_stable() {
        let items = vec![
            menu_item(1, "B", 5),
            menu_item(2, "A", 3),
            menu_item(3, "C", 5),
            menu_item(4, "D", 3),
        ];

        let asc = FilterCriteria {
            sort_key: SortKey::PriceAscending,
            ..Default::default()
        };
        assert_eq!(names(&derive_visible_items(&items, &asc)), ["A", "D", "B", "C"]);

        let desc = FilterCriteria {
            sort_key: SortKey::PriceDescending,
            ..Default::default()
        };
        assert_eq!(names(&derive_visible_items(&items, &desc)), ["B", "C", "A", "D"]);
    }

    #[test]
    fn test_price_compare_is_numeric() {
        let mut cheap = menu_item(1, "Cheap", 0);
        cheap.price = Decimal::new(950, 2);
        let pricey = menu_item(2, "Pricey", 10);
        let items = vec![pricey, cheap];

        let asc = FilterCriteria {
            sort_key: SortKey::PriceAscending,
            ..Default::default()
        };
        assert_eq!(names(&derive_visible_items(&items, &asc)), ["Cheap", "Pricey"]);
    }

    #[test]
    fn test_rating_sort_treats_missing_as_zero() {
        let mut good = menu_item(1, "Good", 1);
        good.rating = Some(4.5);
        let unrated = menu_item(2, "Unrated", 1);
        let mut poor = menu_item(3, "Poor", 1);
        poor.rating = Some(1.0);
        let items = vec![unrated, poor, good];

        let criteria = FilterCriteria {
            sort_key: SortKey::RatingDescending,
            ..Default::default()
        };
        assert_eq!(
            names(&derive_visible_items(&items, &criteria)),
            ["Good", "Poor", "Unrated"]
        );
    }

    #[test]
    fn test_derivation_is_deterministic_and_pure() {
        let items = vec![menu_item(1, "Zebra", 2), menu_item(2, "Apple", 1)];
        let snapshot = items.clone();
        let criteria = FilterCriteria {
            search_text: "a".into(),
            sort_key: SortKey::PriceDescending,
            ..Default::default()
        };

        let first = derive_visible_items(&items, &criteria);
        let second = derive_visible_items(&items, &criteria);
        assert_eq!(first, second);
        assert_eq!(items, snapshot);
    }

    #[test]
    fn test_category_options_distinct_in_first_seen_order() {
        let categories = [Some("Mains"), None, Some("Desserts"), Some(""), Some("Mains"), Some("All")];
        let items: Vec<MenuItem> = categories
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let mut item = menu_item(i as i64, "x", 1);
                item.category_name = c.map(str::to_string);
                item
            })
            .collect();

        assert_eq!(derive_category_options(&items), ["All", "Mains", "Desserts"]);
    }

    #[test]
    fn test_empty_catalog() {
        assert_eq!(derive_category_options(&[]), ["All"]);
        assert!(derive_visible_items(&[], &FilterCriteria::default()).is_empty());
    }

    #[test]
    fn test_sort_key_parsing() {
        for key in [
            SortKey::NameAscending,
            SortKey::PriceAscending,
            SortKey::PriceDescending,
            SortKey::RatingDescending,
        ] {
            assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
        }
        assert!("popularity".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_category_filter_from_label() {
        assert_eq!(CategoryFilter::from("All"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from("Drinks".to_string()),
            CategoryFilter::Named("Drinks".into())
        );
        assert_eq!(CategoryFilter::Named("Drinks".into()).label(), "Drinks");
    }
}
