use super::method::{ProcessPayment, dollars};
use crate::error::Result;
use rust_decimal::Decimal;

/// A PayPal payment, identified by the payer's email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayPal {
    pub(crate) email: String,
}

impl PayPal {
    pub const METHOD_NAME: &'static str = "PayPal";

    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl ProcessPayment for PayPal {
    fn method_name(&self) -> &str {
        Self::METHOD_NAME
    }

    fn charge_message(&self, amount: Decimal) -> Result<String> {
        Ok(format!(
            "Processing PayPal payment of {} from {}...",
            dollars(amount),
            self.email
        ))
    }
}
