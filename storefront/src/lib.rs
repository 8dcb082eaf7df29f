//! FoodieHub storefront core
//!
//! Menu browsing and order placement for one customer-facing view:
//!
//! - [`catalog`]: filtered, sorted view of the menu
//! - [`order`]: selection gating and order submission
//! - [`storefront`]: facade tying both to a session
//!
//! The backend is reached through the [`source`] traits; user-facing
//! messages go through a [`Notifier`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod invalidation;
pub mod logger;
pub mod notify;
pub mod order;
pub mod source;
pub mod storefront;

#[cfg(test)]
mod testing;

pub use catalog::{CategoryFilter, FilterCriteria, LoadState, MenuCatalogViewModel, SortKey};
pub use config::StorefrontConfig;
pub use error::{LoadError, OrderError, SubmissionError};
pub use invalidation::{Mutation, QueryTag, TagTracker};
pub use notify::{Notification, NotificationKind, Notifier, TracingNotifier};
pub use order::{
    OrderConfirmation, OrderIntentController, OrderPhase, OrderState, RejectReason, SelectOutcome,
};
pub use source::{CatalogSource, OrderSubmitter};
pub use storefront::Storefront;
