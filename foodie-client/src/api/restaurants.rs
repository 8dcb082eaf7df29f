//! Restaurant API

use shared::models::{Restaurant, RestaurantCreate, RestaurantUpdate};
use shared::MessageResponse;

use crate::client::MaybeEnveloped;
use crate::http::HttpClient;
use crate::{ClientResult, FoodieClient};

impl<H: HttpClient> FoodieClient<H> {
    pub async fn get_all_restaurants(&self) -> ClientResult<Vec<Restaurant>> {
        self.http
            .get::<MaybeEnveloped<Vec<Restaurant>>>("restaurants")
            .await?
            .into_data()
    }

    pub async fn get_restaurant(&self, restaurant_id: i64) -> ClientResult<Restaurant> {
        self.http
            .get::<MaybeEnveloped<Restaurant>>(&format!("restaurants/{restaurant_id}"))
            .await?
            .into_data()
    }

    pub async fn create_restaurant(&self, data: &RestaurantCreate) -> ClientResult<MessageResponse> {
        self.http.post("restaurants", data).await
    }

    pub async fn update_restaurant(
        &self,
        restaurant_id: i64,
        update: &RestaurantUpdate,
    ) -> ClientResult<MessageResponse> {
        self.http
            .put(&format!("restaurants/{restaurant_id}"), update)
            .await
    }

    pub async fn delete_restaurant(&self, restaurant_id: i64) -> ClientResult<MessageResponse> {
        self.http.delete(&format!("restaurants/{restaurant_id}")).await
    }
}
