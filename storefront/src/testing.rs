//! Test doubles shared by the unit tests

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use shared::{MenuItem, OrderPayload};
use tokio::sync::Notify;

use crate::error::{LoadError, SubmissionError};
use crate::notify::{Notification, NotificationKind, Notifier};
use crate::order::OrderConfirmation;
use crate::source::{CatalogSource, OrderSubmitter};

/// Available item with a whole-unit price and no category
pub fn menu_item(id: i64, name: &str, price: i64) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        description: String::new(),
        category_name: None,
        price: Decimal::from(price),
        image_url: String::new(),
        is_available: true,
        quantity: None,
        rating: None,
        prep_time_minutes: None,
        restaurant_id: None,
    }
}

/// Catalog that serves a fixed list, or a fixed error
pub struct StaticCatalog {
    response: Mutex<Result<Vec<MenuItem>, LoadError>>,
    calls: AtomicUsize,
}

impl StaticCatalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            response: Mutex::new(Ok(items)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: LoadError) -> Self {
        Self {
            response: Mutex::new(Err(error)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn fail_with(&self, error: LoadError) {
        *self.response.lock() = Err(error);
    }

    pub fn serve(&self, items: Vec<MenuItem>) {
        *self.response.lock() = Ok(items);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn fetch_all_menu_items(&self) -> Result<Vec<MenuItem>, LoadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.lock().clone()
    }
}

/// Order service double.
///
/// Answers with queued results, falling back to a plain confirmation.
/// After [`hold`](Self::hold) each submission parks until
/// [`release`](Self::release).
#[derive(Default)]
pub struct ScriptedSubmitter {
    responses: Mutex<VecDeque<Result<OrderConfirmation, SubmissionError>>>,
    payloads: Mutex<Vec<OrderPayload>>,
    cancelled: Mutex<Vec<i64>>,
    held: AtomicBool,
    started: Notify,
    release: Notify,
}

impl ScriptedSubmitter {
    pub fn push_ok(&self, message: &str) {
        self.responses
            .lock()
            .push_back(Ok(OrderConfirmation::new(message)));
    }

    pub fn push_err(&self, error: SubmissionError) {
        self.responses.lock().push_back(Err(error));
    }

    pub fn hold(&self) {
        self.held.store(true, Ordering::SeqCst);
    }

    pub fn release(&self) {
        self.release.notify_one();
    }

    /// Resolves once a held submission has reached the service
    pub async fn wait_started(&self) {
        self.started.notified().await;
    }

    pub fn payloads(&self) -> Vec<OrderPayload> {
        self.payloads.lock().clone()
    }

    pub fn calls(&self) -> usize {
        self.payloads.lock().len()
    }

    pub fn cancelled(&self) -> Vec<i64> {
        self.cancelled.lock().clone()
    }

    fn next_response(&self) -> Result<OrderConfirmation, SubmissionError> {
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(OrderConfirmation::new("Order created successfully")))
    }
}

#[async_trait]
impl OrderSubmitter for ScriptedSubmitter {
    async fn submit_order(
        &self,
        payload: &OrderPayload,
    ) -> Result<OrderConfirmation, SubmissionError> {
        self.payloads.lock().push(payload.clone());
        if self.held.load(Ordering::SeqCst) {
            self.started.notify_one();
            self.release.notified().await;
        }
        self.next_response()
    }

    async fn cancel_order(&self, order_id: i64) -> Result<OrderConfirmation, SubmissionError> {
        self.cancelled.lock().push(order_id);
        self.next_response()
    }
}

/// Notifier that keeps everything it is given
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    /// Drain recorded notifications
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.seen.lock())
    }

    pub fn kinds(&self) -> Vec<NotificationKind> {
        self.seen.lock().iter().map(|n| n.kind).collect()
    }

    pub fn of_kind(&self, kind: NotificationKind) -> Vec<String> {
        self.seen
            .lock()
            .iter()
            .filter(|n| n.kind == kind)
            .map(|n| n.message.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        self.seen.lock().push(Notification::new(kind, message));
    }
}
