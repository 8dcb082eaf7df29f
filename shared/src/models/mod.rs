//! Data models
//!
//! Shared between foodie-client and storefront.
//! All IDs are `i64`.

pub mod dashboard;
pub mod menu_item;
pub mod order;
pub mod restaurant;
pub mod session;
pub mod user;

// Re-exports
pub use dashboard::*;
pub use menu_item::*;
pub use order::*;
pub use restaurant::*;
pub use session::*;
pub use user::*;
