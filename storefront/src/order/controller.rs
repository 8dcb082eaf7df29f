//! Order intent controller
//!
//! Gates order creation on eligibility, builds the submission payload and
//! hands it to the [`OrderSubmitter`]. Outcomes are reported through the
//! [`Notifier`].
//!
//! At most one submission is in flight per controller. A second
//! [`confirm_order`](OrderIntentController::confirm_order) while
//! `Submitting` returns [`OrderError::SubmissionInFlight`] without calling
//! the service.

use parking_lot::Mutex;
use shared::{AuthSession, MenuItem, OrderPayload, OrderType};
use tokio_util::sync::CancellationToken;

use super::state::{OrderConfirmation, OrderPhase, OrderState, RejectReason, SelectOutcome};
use crate::error::{OrderError, SubmissionError};
use crate::notify::{NotificationKind, Notifier};
use crate::source::OrderSubmitter;

/// Shown when the service acknowledges without a message
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Order placed successfully!";

const PLACING_ORDER_MESSAGE: &str = "Placing your order";

/// Drives one order attempt at a time for a single view
pub struct OrderIntentController<O, N> {
    submitter: O,
    notifier: N,
    /// Used when a menu item carries no restaurant of its own
    default_restaurant_id: i64,
    state: Mutex<OrderState>,
    /// Cancelled when the owning view goes away
    detached: CancellationToken,
}

impl<O, N> OrderIntentController<O, N>
where
    O: OrderSubmitter,
    N: Notifier,
{
    pub fn new(submitter: O, notifier: N) -> Self {
        Self {
            submitter,
            notifier,
            default_restaurant_id: 1,
            state: Mutex::new(OrderState::Idle),
            detached: CancellationToken::new(),
        }
    }

    pub fn with_default_restaurant(mut self, restaurant_id: i64) -> Self {
        self.default_restaurant_id = restaurant_id;
        self
    }

    /// Snapshot of the current state
    pub fn state(&self) -> OrderState {
        self.state.lock().clone()
    }

    pub fn phase(&self) -> OrderPhase {
        self.state.lock().phase()
    }

    pub fn submitter(&self) -> &O {
        &self.submitter
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// User picked `item`; open the order-type chooser if they may order it.
    ///
    /// Guards run in order and the first failure wins: sign-in, then
    /// orderability.
    pub fn attempt_select(&self, item: &MenuItem, session: &AuthSession) -> SelectOutcome {
        if self.detached.is_cancelled() {
            return SelectOutcome::Rejected(RejectReason::Closed);
        }

        let outcome = {
            let mut state = self.state.lock();
            if state.phase() == OrderPhase::Submitting {
                tracing::debug!(menu_item_id = item.id, "selection ignored while submitting");
                return SelectOutcome::Rejected(RejectReason::Busy);
            }

            let outcome = if !session.is_authenticated {
                SelectOutcome::Rejected(RejectReason::NotAuthenticated)
            } else if !item.is_orderable() {
                SelectOutcome::Rejected(RejectReason::Unavailable)
            } else {
                SelectOutcome::Accepted
            };

            *state = match outcome {
                SelectOutcome::Accepted => OrderState::SelectingType { item: item.clone() },
                SelectOutcome::Rejected(reason) => OrderState::Rejected { reason },
            };
            outcome
        };

        match outcome {
            SelectOutcome::Accepted => {
                tracing::info!(menu_item_id = item.id, "menu item selected");
            }
            SelectOutcome::Rejected(reason) => {
                tracing::info!(menu_item_id = item.id, ?reason, "menu item selection rejected");
                self.notifier.notify(NotificationKind::Error, reason.message());
            }
        }
        outcome
    }

    /// Close the order-type chooser (or dismiss a failure) without ordering.
    ///
    /// Returns `false` when there was nothing to cancel.
    pub fn cancel(&self) -> bool {
        if self.detached.is_cancelled() {
            return false;
        }
        let mut state = self.state.lock();
        match state.phase() {
            OrderPhase::SelectingType | OrderPhase::Failed => {
                *state = OrderState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Re-open the chooser after a failure with the same item.
    ///
    /// Returns the order type used by the failed attempt.
    pub fn retry(&self) -> Option<OrderType> {
        if self.detached.is_cancelled() {
            return None;
        }
        let mut state = self.state.lock();
        match std::mem::take(&mut *state) {
            OrderState::Failed {
                item, order_type, ..
            } => {
                *state = OrderState::SelectingType { item };
                Some(order_type)
            }
            other => {
                *state = other;
                None
            }
        }
    }

    /// Submit an order for the bound item.
    ///
    /// Valid from `SelectingType`, and from `Failed` as a direct re-confirm.
    /// Submission failures land in `Failed` with the selection preserved and
    /// are also returned as [`OrderError::Submission`].
    pub async fn confirm_order(
        &self,
        order_type: OrderType,
        session: &AuthSession,
    ) -> Result<OrderConfirmation, OrderError> {
        let payload = self.begin_submission(order_type, session)?;
        self.notifier
            .notify(NotificationKind::Loading, PLACING_ORDER_MESSAGE);

        let result = self.submitter.submit_order(&payload).await;

        if self.detached.is_cancelled() {
            // The order may still have been created; the view is gone so leave it alone
            tracing::info!(
                menu_item_id = payload.menu_item_id,
                succeeded = result.is_ok(),
                "order submission resolved after teardown"
            );
            return result.map_err(OrderError::from);
        }

        self.finish_submission(order_type, result)
    }

    /// Build the payload sent for `item`
    pub fn build_payload(&self, item: &MenuItem, order_type: OrderType, customer_id: i64) -> OrderPayload {
        OrderPayload {
            restaurant_id: item.restaurant_id.unwrap_or(self.default_restaurant_id),
            customer_id,
            menu_item_id: item.id,
            total_amount: item.price,
            order_type,
        }
    }

    /// Detach from the owning view.
    ///
    /// A pending submission is not cancelled, but its outcome no longer
    /// touches state or notifications.
    pub fn teardown(&self) {
        tracing::debug!("order controller torn down");
        self.detached.cancel();
    }

    pub fn is_torn_down(&self) -> bool {
        self.detached.is_cancelled()
    }

    fn begin_submission(
        &self,
        order_type: OrderType,
        session: &AuthSession,
    ) -> Result<OrderPayload, OrderError> {
        if self.detached.is_cancelled() {
            return Err(OrderError::Closed);
        }

        let mut state = self.state.lock();
        let item = match &*state {
            OrderState::SelectingType { item } | OrderState::Failed { item, .. } => item.clone(),
            OrderState::Submitting { .. } => {
                tracing::debug!("confirm ignored: submission already in flight");
                return Err(OrderError::SubmissionInFlight);
            }
            _ => return Err(OrderError::NothingSelected),
        };

        let Some(customer_id) = session.customer_id() else {
            drop(state);
            self.notifier
                .notify(NotificationKind::Error, RejectReason::NotAuthenticated.message());
            return Err(OrderError::NotAuthenticated);
        };

        let payload = self.build_payload(&item, order_type, customer_id);
        *state = OrderState::Submitting { item, order_type };
        tracing::info!(
            menu_item_id = payload.menu_item_id,
            restaurant_id = payload.restaurant_id,
            %order_type,
            "order submitting"
        );
        Ok(payload)
    }

    fn finish_submission(
        &self,
        order_type: OrderType,
        result: Result<OrderConfirmation, SubmissionError>,
    ) -> Result<OrderConfirmation, OrderError> {
        let mut state = self.state.lock();
        let item = match std::mem::take(&mut *state) {
            OrderState::Submitting { item, .. } => item,
            other => {
                // Only this controller leaves Submitting, so this is unreachable in practice
                tracing::warn!(phase = ?other.phase(), "submission finished outside Submitting");
                *state = other;
                return result.map_err(OrderError::from);
            }
        };

        match result {
            Ok(confirmation) => {
                *state = OrderState::Succeeded {
                    confirmation: confirmation.clone(),
                };
                drop(state);
                tracing::info!(menu_item_id = item.id, %order_type, "order placed");
                let message = if confirmation.message.trim().is_empty() {
                    DEFAULT_SUCCESS_MESSAGE
                } else {
                    confirmation.message.as_str()
                };
                self.notifier.notify(NotificationKind::Success, message);
                Ok(confirmation)
            }
            Err(error) => {
                *state = OrderState::Failed {
                    item: item.clone(),
                    order_type,
                    error: error.clone(),
                };
                drop(state);
                tracing::warn!(menu_item_id = item.id, %order_type, error = %error, "order failed");
                self.notifier
                    .notify(NotificationKind::Error, &error.user_message());
                Err(OrderError::Submission(error))
            }
        }
    }
}
