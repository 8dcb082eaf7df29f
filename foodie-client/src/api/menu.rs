//! Menu Item API

use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use shared::{ApiResponse, MessageResponse};

use crate::client::MaybeEnveloped;
use crate::http::HttpClient;
use crate::{ClientResult, FoodieClient};

impl<H: HttpClient> FoodieClient<H> {
    /// Fetch the full catalog envelope
    ///
    /// A `success: false` envelope is returned as-is so callers can decide
    /// how to surface it.
    pub async fn get_all_menu_items(&self) -> ClientResult<ApiResponse<Vec<MenuItem>>> {
        match self.http.get::<MaybeEnveloped<Vec<MenuItem>>>("menu-items").await? {
            MaybeEnveloped::Enveloped(resp) => Ok(resp),
            MaybeEnveloped::Bare(items) => Ok(ApiResponse::ok(items)),
        }
    }

    pub async fn get_menu_item(&self, id: i64) -> ClientResult<MenuItem> {
        self.http
            .get::<MaybeEnveloped<MenuItem>>(&format!("menu-items/{id}"))
            .await?
            .into_data()
    }

    pub async fn add_menu_item(&self, item: &MenuItemCreate) -> ClientResult<MessageResponse> {
        self.http.post("menu-items", item).await
    }

    pub async fn update_menu_item(
        &self,
        id: i64,
        update: &MenuItemUpdate,
    ) -> ClientResult<MessageResponse> {
        self.http.put(&format!("menu-items/{id}"), update).await
    }

    pub async fn delete_menu_item(&self, id: i64) -> ClientResult<MessageResponse> {
        self.http.delete(&format!("menu-items/{id}")).await
    }
}
