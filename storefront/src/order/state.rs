//! Order attempt state machine
//!
//! ```text
//! Idle ──select(ok)──▶ SelectingType ──confirm──▶ Submitting ──▶ Succeeded
//!  │                      │                            └───────▶ Failed
//!  └─select(ineligible)─▶ Rejected      cancel ◀─┘     retry ◀────┘
//! ```

use shared::{MenuItem, OrderType};

use crate::error::SubmissionError;

/// Acknowledgement returned by the submission service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    pub message: String,
}

impl OrderConfirmation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Why a selection was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// No signed-in customer
    NotAuthenticated,
    /// Vendor flag off or no stock left
    Unavailable,
    /// A submission from this controller is still pending
    Busy,
    /// The owning view has been torn down
    Closed,
}

impl RejectReason {
    /// Text for the notification surface
    pub fn message(&self) -> &'static str {
        match self {
            Self::NotAuthenticated => "Please sign in to place an order",
            Self::Unavailable => "This item is currently unavailable",
            Self::Busy => "Your previous order is still being placed",
            Self::Closed => "This view is no longer active",
        }
    }
}

/// Result of [`attempt_select`](super::OrderIntentController::attempt_select)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Accepted,
    Rejected(RejectReason),
}

impl SelectOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// State of the current order attempt
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OrderState {
    #[default]
    Idle,
    /// Order-type chooser open for `item`
    SelectingType { item: MenuItem },
    Submitting {
        item: MenuItem,
        order_type: OrderType,
    },
    Succeeded { confirmation: OrderConfirmation },
    /// Selection kept so the user can retry
    Failed {
        item: MenuItem,
        order_type: OrderType,
        error: SubmissionError,
    },
    Rejected { reason: RejectReason },
}

/// Payload-free view of [`OrderState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderPhase {
    Idle,
    SelectingType,
    Submitting,
    Succeeded,
    Failed,
    Rejected,
}

impl OrderState {
    pub fn phase(&self) -> OrderPhase {
        match self {
            Self::Idle => OrderPhase::Idle,
            Self::SelectingType { .. } => OrderPhase::SelectingType,
            Self::Submitting { .. } => OrderPhase::Submitting,
            Self::Succeeded { .. } => OrderPhase::Succeeded,
            Self::Failed { .. } => OrderPhase::Failed,
            Self::Rejected { .. } => OrderPhase::Rejected,
        }
    }

    /// Item the current attempt is about, if any
    pub fn bound_item(&self) -> Option<&MenuItem> {
        match self {
            Self::SelectingType { item }
            | Self::Submitting { item, .. }
            | Self::Failed { item, .. } => Some(item),
            _ => None,
        }
    }

    /// Order type chosen for the current attempt, if any
    pub fn order_type(&self) -> Option<OrderType> {
        match self {
            Self::Submitting { order_type, .. } | Self::Failed { order_type, .. } => {
                Some(*order_type)
            }
            _ => None,
        }
    }
}
