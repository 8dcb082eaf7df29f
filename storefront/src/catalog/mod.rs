//! Menu catalog browsing

pub mod filter;
pub mod view_model;

pub use filter::{
    ALL_CATEGORIES, CategoryFilter, FilterCriteria, SortKey, derive_category_options,
    derive_visible_items,
};
pub use view_model::{LoadState, MenuCatalogViewModel};
