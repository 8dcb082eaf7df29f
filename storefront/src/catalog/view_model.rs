//! Menu catalog view-model
//!
//! Holds the fetched catalog and the user's filter criteria, and keeps the
//! derived visible list and category options in sync with both.

use shared::MenuItem;

use super::filter::{
    CategoryFilter, FilterCriteria, SortKey, derive_category_options, derive_visible_items,
};
use crate::error::LoadError;
use crate::source::CatalogSource;

/// Catalog fetch status
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Last fetch failed; previously loaded items (if any) are still shown
    Failed(LoadError),
}

/// View-model of the menu page
#[derive(Debug, Clone)]
pub struct MenuCatalogViewModel {
    items: Vec<MenuItem>,
    criteria: FilterCriteria,
    visible: Vec<MenuItem>,
    categories: Vec<String>,
    load_state: LoadState,
}

impl MenuCatalogViewModel {
    /// Empty catalog with default criteria
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            criteria: FilterCriteria::default(),
            visible: Vec::new(),
            categories: derive_category_options(&[]),
            load_state: LoadState::Idle,
        }
    }

    /// View-model over an already fetched catalog
    pub fn with_items(items: Vec<MenuItem>) -> Self {
        let mut vm = Self::new();
        vm.replace_items(items);
        vm
    }

    /// Raw catalog as fetched
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Filtered and sorted items
    pub fn visible(&self) -> &[MenuItem] {
        &self.visible
    }

    /// Category choices, `"All"` first
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn find(&self, id: i64) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.criteria.search_text = text.into();
        self.recompute_visible();
    }

    pub fn set_category(&mut self, category: impl Into<CategoryFilter>) {
        self.criteria.category = category.into();
        self.recompute_visible();
    }

    pub fn set_available_only(&mut self, available_only: bool) {
        self.criteria.available_only = available_only;
        self.recompute_visible();
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.criteria.sort_key = sort_key;
        self.recompute_visible();
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.recompute_visible();
    }

    /// Back to the criteria a fresh view starts with
    pub fn reset_criteria(&mut self) {
        self.set_criteria(FilterCriteria::default());
    }

    /// Swap in a freshly fetched catalog
    pub fn replace_items(&mut self, items: Vec<MenuItem>) {
        self.items = items;
        self.categories = derive_category_options(&self.items);
        self.recompute_visible();
    }

    /// Fetch the catalog from `source`.
    ///
    /// On failure the previous items stay in place and the error is kept in
    /// [`LoadState::Failed`]. Nothing is retried.
    pub async fn load<S>(&mut self, source: &S) -> Result<usize, LoadError>
    where
        S: CatalogSource + ?Sized,
    {
        self.load_state = LoadState::Loading;

        match source.fetch_all_menu_items().await {
            Ok(items) => {
                let count = items.len();
                self.replace_items(items);
                self.load_state = LoadState::Loaded;
                tracing::info!(count, "catalog loaded");
                Ok(count)
            }
            Err(e) => {
                tracing::warn!(error = %e, kept = self.items.len(), "catalog load failed");
                self.load_state = LoadState::Failed(e.clone());
                Err(e)
            }
        }
    }

    fn recompute_visible(&mut self) {
        self.visible = derive_visible_items(&self.items, &self.criteria);
        tracing::debug!(
            total = self.items.len(),
            visible = self.visible.len(),
            sort = %self.criteria.sort_key,
            "visible items recomputed"
        );
    }
}

impl Default for MenuCatalogViewModel {
    fn default() -> Self {
        Self::new()
    }
}
