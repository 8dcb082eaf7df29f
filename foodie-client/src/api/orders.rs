//! Order API

use shared::models::{OrderPayload, OrderRecord, OrderStatus, OrderStatusUpdate};
use shared::MessageResponse;

use crate::client::MaybeEnveloped;
use crate::http::HttpClient;
use crate::{ClientResult, FoodieClient};

impl<H: HttpClient> FoodieClient<H> {
    pub async fn get_all_orders(&self) -> ClientResult<Vec<OrderRecord>> {
        self.http
            .get::<MaybeEnveloped<Vec<OrderRecord>>>("orders")
            .await?
            .into_data()
    }

    /// Order history of one customer
    pub async fn get_orders_by_customer(&self, customer_id: i64) -> ClientResult<Vec<OrderRecord>> {
        self.http
            .get::<MaybeEnveloped<Vec<OrderRecord>>>(&format!("orders/customer/{customer_id}"))
            .await?
            .into_data()
    }

    pub async fn get_order(&self, order_id: i64) -> ClientResult<OrderRecord> {
        self.http
            .get::<MaybeEnveloped<OrderRecord>>(&format!("orders/{order_id}"))
            .await?
            .into_data()
    }

    /// Place a new order
    pub async fn add_order(&self, payload: &OrderPayload) -> ClientResult<MessageResponse> {
        tracing::info!(
            menu_item_id = payload.menu_item_id,
            order_type = %payload.order_type,
            "submitting order"
        );
        self.http.post("orders", payload).await
    }

    pub async fn update_order_status(
        &self,
        order_id: i64,
        status: OrderStatus,
    ) -> ClientResult<MessageResponse> {
        self.http
            .patch(&format!("orders/{order_id}"), &OrderStatusUpdate { status })
            .await
    }

    /// Cancel (delete) an order
    pub async fn delete_order(&self, order_id: i64) -> ClientResult<MessageResponse> {
        self.http.delete(&format!("orders/{order_id}")).await
    }
}
