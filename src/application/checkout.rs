use crate::domain::InstallmentPlan;
use crate::domain::method::ProcessPayment;
use crate::domain::receipt::Receipt;
use crate::domain::request::PaymentRequest;
use crate::error::Result;
use std::io::Write;
use tracing::debug;

/// Processes payment requests one at a time, in the order they are submitted.
///
/// `Checkout` owns the sink that receives the charge messages and the plan used
/// for Klarna requests that do not name an installment count.
pub struct Checkout<W: Write> {
    out: W,
    default_plan: InstallmentPlan,
    receipts: Vec<Receipt>,
}

impl<W: Write> Checkout<W> {
    /// Creates a new `Checkout` instance.
    ///
    /// # Arguments
    ///
    /// * `out` - Sink receiving one message line per processed payment.
    /// * `default_plan` - Installment plan for Klarna requests without one.
    pub fn new(out: W, default_plan: InstallmentPlan) -> Self {
        Self {
            out,
            default_plan,
            receipts: Vec::new(),
        }
    }

    /// Processes a single request and records its receipt.
    ///
    /// Nothing is written or recorded when the request cannot be turned into
    /// a payment method.
    pub fn process_request(&mut self, request: PaymentRequest) -> Result<Receipt> {
        let amount = request.amount;
        let method = request.into_method(self.default_plan)?;
        let success = method.process_payment_to(&mut self.out, amount)?;

        let receipt = Receipt {
            method: method.method_name().to_string(),
            amount,
            success,
        };
        debug!(method = %receipt.method, %amount, success, "receipt recorded");
        self.receipts.push(receipt.clone());
        Ok(receipt)
    }

    /// Consumes the checkout and returns every receipt in processing order.
    pub fn into_receipts(mut self) -> Result<Vec<Receipt>> {
        self.out.flush()?;
        Ok(self.receipts)
    }
}
