//! Shared types for FoodieHub
//!
//! Data models, auth DTOs and response envelopes used by both the REST
//! client and the storefront.

pub mod client;
pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{AuthSession, MenuItem, OrderPayload, OrderType};
pub use response::{ApiResponse, ErrorBody, MessageResponse};
