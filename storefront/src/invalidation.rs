//! Query-tag invalidation
//!
//! Every cached read belongs to a tag. Mutations mark the tags they touch
//! as stale, and the next read of a stale tag goes back to the backend.

use std::collections::HashSet;
use std::fmt;

/// Group of cached reads that go stale together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryTag {
    MenuItems,
    Orders,
    Users,
    Restaurants,
    DashboardData,
}

impl QueryTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MenuItems => "MenuItems",
            Self::Orders => "Orders",
            Self::Users => "Users",
            Self::Restaurants => "Restaurants",
            Self::DashboardData => "DashboardData",
        }
    }
}

impl fmt::Display for QueryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Writes issued by the storefront
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    PlaceOrder,
    CancelOrder,
}

impl Mutation {
    /// Tags whose cached data this mutation makes stale
    pub fn invalidates(&self) -> &'static [QueryTag] {
        match self {
            // Placing an order can change stock, so the catalog is refetched too
            Self::PlaceOrder => &[QueryTag::Orders, QueryTag::MenuItems, QueryTag::DashboardData],
            Self::CancelOrder => &[QueryTag::Orders, QueryTag::DashboardData],
        }
    }
}

/// Set of stale tags
#[derive(Debug, Clone, Default)]
pub struct TagTracker {
    stale: HashSet<QueryTag>,
}

impl TagTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark everything `mutation` touches as stale
    pub fn record(&mut self, mutation: Mutation) {
        for tag in mutation.invalidates() {
            self.invalidate(*tag);
        }
        tracing::debug!(?mutation, stale = self.stale.len(), "mutation recorded");
    }

    pub fn invalidate(&mut self, tag: QueryTag) {
        self.stale.insert(tag);
    }

    pub fn is_stale(&self, tag: QueryTag) -> bool {
        self.stale.contains(&tag)
    }

    /// Clear `tag`, returning whether it was stale
    pub fn take(&mut self, tag: QueryTag) -> bool {
        self.stale.remove(&tag)
    }
}
