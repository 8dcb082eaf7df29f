//! Storefront session facade
//!
//! Ties one menu view together: the catalog view-model, the order
//! controller, stale-tag bookkeeping and the current session.

use shared::{AuthSession, OrderType};

use crate::catalog::MenuCatalogViewModel;
use crate::error::{LoadError, OrderError, SubmissionError};
use crate::invalidation::{Mutation, QueryTag, TagTracker};
use crate::notify::{NotificationKind, Notifier};
use crate::order::{OrderConfirmation, OrderIntentController, RejectReason, SelectOutcome};
use crate::source::{CatalogSource, OrderSubmitter};

const DEFAULT_CANCEL_MESSAGE: &str = "Order canceled successfully";

/// One storefront menu view
pub struct Storefront<S, O, N> {
    source: S,
    catalog: MenuCatalogViewModel,
    orders: OrderIntentController<O, N>,
    notifier: N,
    tags: TagTracker,
    session: AuthSession,
}

impl<S, O, N> Storefront<S, O, N>
where
    S: CatalogSource,
    O: OrderSubmitter,
    N: Notifier + Clone,
{
    pub fn new(source: S, submitter: O, notifier: N) -> Self {
        Self {
            source,
            catalog: MenuCatalogViewModel::new(),
            orders: OrderIntentController::new(submitter, notifier.clone()),
            notifier,
            tags: TagTracker::new(),
            session: AuthSession::anonymous(),
        }
    }

    pub fn with_default_restaurant(mut self, restaurant_id: i64) -> Self {
        self.orders = self.orders.with_default_restaurant(restaurant_id);
        self
    }

    pub fn catalog(&self) -> &MenuCatalogViewModel {
        &self.catalog
    }

    /// Mutable access for filter changes
    pub fn catalog_mut(&mut self) -> &mut MenuCatalogViewModel {
        &mut self.catalog
    }

    pub fn orders(&self) -> &OrderIntentController<O, N> {
        &self.orders
    }

    pub fn tags(&self) -> &TagTracker {
        &self.tags
    }

    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    pub fn sign_in(&mut self, session: AuthSession) {
        tracing::info!(user_id = ?session.user_id, "session signed in");
        self.session = session;
    }

    pub fn sign_out(&mut self) {
        tracing::info!("session signed out");
        self.session = AuthSession::anonymous();
    }

    /// Open the view: default criteria and a fresh catalog
    pub async fn enter(&mut self) -> Result<usize, LoadError> {
        self.catalog.reset_criteria();
        self.refresh().await
    }

    /// Refetch the catalog, keeping criteria and the current list on failure
    pub async fn refresh(&mut self) -> Result<usize, LoadError> {
        self.tags.take(QueryTag::MenuItems);
        let result = self.catalog.load(&self.source).await;
        if let Err(e) = &result {
            self.notifier
                .notify(NotificationKind::Error, e.user_message());
        }
        result
    }

    /// Refetch only when a mutation has made the catalog stale
    pub async fn refresh_if_stale(&mut self) -> Option<Result<usize, LoadError>> {
        if !self.tags.is_stale(QueryTag::MenuItems) {
            return None;
        }
        Some(self.refresh().await)
    }

    /// Select a catalog item by id; `None` if it is not in the catalog
    pub fn select(&self, item_id: i64) -> Option<SelectOutcome> {
        let Some(item) = self.catalog.find(item_id) else {
            tracing::debug!(menu_item_id = item_id, "selected item not in catalog");
            return None;
        };
        Some(self.orders.attempt_select(item, &self.session))
    }

    /// Confirm the selected item with `order_type`.
    ///
    /// On success the catalog is refetched so stock changes show up.
    pub async fn place_order(
        &mut self,
        order_type: OrderType,
    ) -> Result<OrderConfirmation, OrderError> {
        let confirmation = self.orders.confirm_order(order_type, &self.session).await?;
        if self.orders.is_torn_down() {
            return Ok(confirmation);
        }

        self.tags.record(Mutation::PlaceOrder);
        // A failed refetch is already reported and leaves the old list in place
        let _ = self.refresh_if_stale().await;
        Ok(confirmation)
    }

    /// Cancel one of the signed-in customer's orders
    pub async fn cancel_order(&mut self, order_id: i64) -> Result<OrderConfirmation, OrderError> {
        if self.orders.is_torn_down() {
            return Err(OrderError::Closed);
        }
        if !self.session.is_authenticated {
            self.notifier
                .notify(NotificationKind::Error, RejectReason::NotAuthenticated.message());
            return Err(OrderError::NotAuthenticated);
        }

        match self.orders.submitter().cancel_order(order_id).await {
            Ok(confirmation) => {
                tracing::info!(order_id, "order canceled");
                self.tags.record(Mutation::CancelOrder);
                let message = if confirmation.message.trim().is_empty() {
                    DEFAULT_CANCEL_MESSAGE
                } else {
                    confirmation.message.as_str()
                };
                self.notifier.notify(NotificationKind::Success, message);
                Ok(confirmation)
            }
            Err(e) => {
                tracing::warn!(order_id, error = %e, "order cancel failed");
                self.notifier
                    .notify(NotificationKind::Error, &cancel_failure_message(&e));
                Err(OrderError::Submission(e))
            }
        }
    }

    /// Close the view; a pending order still completes on the backend
    pub fn leave(&self) {
        self.orders.teardown();
    }
}

fn cancel_failure_message(error: &SubmissionError) -> String {
    error
        .reason()
        .map(str::to_string)
        .unwrap_or_else(|| "Failed to cancel order. Please try again.".to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::catalog::{LoadState, SortKey};
    use crate::notify::Notification;
    use crate::order::OrderPhase;
    use crate::testing::{RecordingNotifier, ScriptedSubmitter, StaticCatalog, menu_item};

    type TestStorefront =
        Storefront<Arc<StaticCatalog>, Arc<ScriptedSubmitter>, Arc<RecordingNotifier>>;

    struct Harness {
        storefront: TestStorefront,
        catalog: Arc<StaticCatalog>,
        submitter: Arc<ScriptedSubmitter>,
        notifier: Arc<RecordingNotifier>,
    }

    fn harness() -> Harness {
        let mut out_of_stock = menu_item(2, "Apple Pie", 5);
        out_of_stock.quantity = Some(0);
        let catalog = Arc::new(StaticCatalog::new(vec![
            menu_item(1, "Zebra Cake", 10),
            out_of_stock,
        ]));
        let submitter = Arc::new(ScriptedSubmitter::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let storefront = Storefront::new(catalog.clone(), submitter.clone(), notifier.clone())
            .with_default_restaurant(3);
        Harness {
            storefront,
            catalog,
            submitter,
            notifier,
        }
    }

    #[tokio::test]
    async fn test_enter_resets_criteria_and_loads() {
        let mut h = harness();
        h.storefront.catalog_mut().set_sort_key(SortKey::PriceDescending);

        assert_eq!(h.storefront.enter().await.unwrap(), 2);
        assert_eq!(h.storefront.catalog().criteria().sort_key, SortKey::NameAscending);
        assert_eq!(h.storefront.catalog().visible()[0].name, "Apple Pie");
        assert!(h.notifier.take().is_empty());
    }

    #[tokio::test]
    async fn test_enter_failure_notifies_load_error() {
        let mut h = harness();
        h.catalog.fail_with(LoadError::Transport("connection refused".into()));

        assert!(h.storefront.enter().await.is_err());
        assert!(matches!(h.storefront.catalog().load_state(), LoadState::Failed(_)));
        assert_eq!(
            h.notifier.take(),
            vec![Notification::new(NotificationKind::Error, LoadError::USER_MESSAGE)]
        );
    }

    #[tokio::test]
    async fn test_select_unknown_item() {
        let mut h = harness();
        h.storefront.enter().await.unwrap();
        h.storefront.sign_in(AuthSession::authenticated(7));

        assert_eq!(h.storefront.select(99), None);
        assert_eq!(
            h.storefront.select(2),
            Some(SelectOutcome::Rejected(RejectReason::Unavailable))
        );
        assert_eq!(h.storefront.select(1), Some(SelectOutcome::Accepted));
    }

    #[tokio::test]
    async fn test_place_order_refetches_catalog() {
        let mut h = harness();
        h.storefront.enter().await.unwrap();
        h.storefront.sign_in(AuthSession::authenticated(7));
        h.storefront.select(1);

        h.catalog.serve(vec![menu_item(1, "Zebra Cake", 10)]);
        h.storefront.place_order(OrderType::DineIn).await.unwrap();

        assert_eq!(h.catalog.calls(), 2);
        assert_eq!(h.storefront.catalog().items().len(), 1);
        assert!(!h.storefront.tags().is_stale(QueryTag::MenuItems));
        assert!(h.storefront.tags().is_stale(QueryTag::Orders));

        let payload = &h.submitter.payloads()[0];
        assert_eq!(payload.customer_id, 7);
        assert_eq!(payload.restaurant_id, 3);
        assert_eq!(h.notifier.of_kind(NotificationKind::Success).len(), 1);
    }

    #[tokio::test]
    async fn test_failed_order_does_not_refetch() {
        let mut h = harness();
        h.storefront.enter().await.unwrap();
        h.storefront.sign_in(AuthSession::authenticated(7));
        h.storefront.select(1);
        h.submitter.push_err(SubmissionError::Transport("reset".into()));

        assert!(h.storefront.place_order(OrderType::Takeaway).await.is_err());
        assert_eq!(h.catalog.calls(), 1);
        assert_eq!(h.storefront.orders().phase(), OrderPhase::Failed);
    }

    #[tokio::test]
    async fn test_cancel_order_requires_sign_in() {
        let mut h = harness();
        let err = h.storefront.cancel_order(12).await.unwrap_err();

        assert_eq!(err, OrderError::NotAuthenticated);
        assert!(h.submitter.cancelled().is_empty());
        assert_eq!(h.notifier.kinds(), vec![NotificationKind::Error]);
    }

    #[tokio::test]
    async fn test_cancel_order() {
        let mut h = harness();
        h.storefront.sign_in(AuthSession::authenticated(7));
        h.submitter.push_ok("");

        h.storefront.cancel_order(12).await.unwrap();
        assert_eq!(h.submitter.cancelled(), vec![12]);
        assert!(h.storefront.tags().is_stale(QueryTag::Orders));
        assert!(!h.storefront.tags().is_stale(QueryTag::MenuItems));
        assert_eq!(
            h.notifier.of_kind(NotificationKind::Success),
            vec![DEFAULT_CANCEL_MESSAGE.to_string()]
        );
    }

    #[tokio::test]
    async fn test_cancel_order_failure_reason() {
        let mut h = harness();
        h.storefront.sign_in(AuthSession::authenticated(7));
        h.submitter.push_err(SubmissionError::Rejected {
            status: Some(404),
            reason: Some("Order not found".into()),
        });

        assert!(h.storefront.cancel_order(12).await.is_err());
        assert_eq!(
            h.notifier.of_kind(NotificationKind::Error),
            vec!["Order not found".to_string()]
        );
    }

    #[tokio::test]
    async fn test_leave_closes_order_flow() {
        let mut h = harness();
        h.storefront.enter().await.unwrap();
        h.storefront.sign_in(AuthSession::authenticated(7));
        h.storefront.leave();

        assert_eq!(
            h.storefront.select(1),
            Some(SelectOutcome::Rejected(RejectReason::Closed))
        );
        assert_eq!(h.storefront.cancel_order(1).await, Err(OrderError::Closed));
    }
}
