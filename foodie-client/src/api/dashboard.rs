//! Dashboard API

use shared::models::{AdminStats, UserStats};

use crate::client::DataWrapper;
use crate::http::HttpClient;
use crate::{ClientResult, FoodieClient};

impl<H: HttpClient> FoodieClient<H> {
    pub async fn admin_dashboard(&self) -> ClientResult<AdminStats> {
        Ok(self
            .http
            .get::<DataWrapper<AdminStats>>("admin-dashboard")
            .await?
            .data)
    }

    pub async fn user_dashboard(&self, user_id: i64) -> ClientResult<UserStats> {
        Ok(self
            .http
            .get::<DataWrapper<UserStats>>(&format!("dashboard/{user_id}"))
            .await?
            .data)
    }
}
