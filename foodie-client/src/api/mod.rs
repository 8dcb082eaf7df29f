//! Endpoint groups of the FoodieHub API

pub mod auth;
pub mod dashboard;
pub mod menu;
pub mod orders;
pub mod restaurants;
pub mod users;
