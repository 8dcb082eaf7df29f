//! Foodie Client - HTTP client for the FoodieHub backend
//!
//! Provides typed REST calls for auth, menu items, orders, restaurants,
//! users and dashboard statistics.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;

pub use client::FoodieClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};

// Re-export shared types for convenience
pub use shared::client::{LoginResponse, RegisterRequest, UserInfo};
pub use shared::{ApiResponse, MessageResponse};
