use rust_decimal::Decimal;
use serde::Serialize;

/// Outcome of one processed payment request.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Receipt {
    /// Display name of the method that handled the payment.
    pub method: String,
    pub amount: Decimal,
    pub success: bool,
}
