//! Order placement

pub mod controller;
pub mod state;

pub use controller::{DEFAULT_SUCCESS_MESSAGE, OrderIntentController};
pub use state::{OrderConfirmation, OrderPhase, OrderState, RejectReason, SelectOutcome};
