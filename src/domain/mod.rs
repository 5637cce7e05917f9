//! Payment method model.
//!
//! Every payment method implements the [`ProcessPayment`] capability. The closed
//! set of supported methods is the [`PaymentMethod`] sum type, which dispatches
//! the capability to the concrete variant.

pub mod credit_card;
pub mod klarna;
pub mod method;
pub mod paypal;
pub mod receipt;
pub mod request;

pub use credit_card::CreditCard;
pub use klarna::{InstallmentPlan, Klarna};
pub use method::{PaymentMethod, ProcessPayment};
pub use paypal::PayPal;
