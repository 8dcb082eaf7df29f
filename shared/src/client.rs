//! Client-related types shared between the REST client and the storefront
//!
//! Auth request/response DTOs used in API communication.

use serde::{Deserialize, Serialize};

use crate::models::UserType;

// Re-export response types used alongside the auth DTOs
pub use crate::response::{ApiResponse, MessageResponse};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "userInfo")]
    pub user_info: UserInfo,
}

/// User information returned at login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub user_type: UserType,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}
