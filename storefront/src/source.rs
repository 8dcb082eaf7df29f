//! Boundaries to the backend
//!
//! The view-model and the order controller only see these traits. The
//! FoodieHub REST client implements them; tests plug in doubles.

use std::sync::Arc;

use async_trait::async_trait;
use foodie_client::{FoodieClient, HttpClient};
use shared::{MenuItem, OrderPayload};

use crate::error::{LoadError, SubmissionError};
use crate::order::OrderConfirmation;

/// Read-only catalog of menu items
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_all_menu_items(&self) -> Result<Vec<MenuItem>, LoadError>;
}

/// Service that persists new orders
#[async_trait]
pub trait OrderSubmitter: Send + Sync {
    async fn submit_order(&self, payload: &OrderPayload)
    -> Result<OrderConfirmation, SubmissionError>;

    async fn cancel_order(&self, order_id: i64) -> Result<OrderConfirmation, SubmissionError>;
}

#[async_trait]
impl<H: HttpClient> CatalogSource for FoodieClient<H> {
    async fn fetch_all_menu_items(&self) -> Result<Vec<MenuItem>, LoadError> {
        let resp = self.get_all_menu_items().await?;
        resp.into_result()
            .map_err(|reason| LoadError::Rejected { reason })
    }
}

#[async_trait]
impl<H: HttpClient> OrderSubmitter for FoodieClient<H> {
    async fn submit_order(
        &self,
        payload: &OrderPayload,
    ) -> Result<OrderConfirmation, SubmissionError> {
        let resp = self.add_order(payload).await?;
        Ok(OrderConfirmation::new(resp.message))
    }

    async fn cancel_order(&self, order_id: i64) -> Result<OrderConfirmation, SubmissionError> {
        let resp = self.delete_order(order_id).await?;
        Ok(OrderConfirmation::new(resp.message))
    }
}

#[async_trait]
impl<T: CatalogSource + ?Sized> CatalogSource for Arc<T> {
    async fn fetch_all_menu_items(&self) -> Result<Vec<MenuItem>, LoadError> {
        (**self).fetch_all_menu_items().await
    }
}

#[async_trait]
impl<T: OrderSubmitter + ?Sized> OrderSubmitter for Arc<T> {
    async fn submit_order(
        &self,
        payload: &OrderPayload,
    ) -> Result<OrderConfirmation, SubmissionError> {
        (**self).submit_order(payload).await
    }

    async fn cancel_order(&self, order_id: i64) -> Result<OrderConfirmation, SubmissionError> {
        (**self).cancel_order(order_id).await
    }
}
