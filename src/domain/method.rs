use super::credit_card::CreditCard;
use super::klarna::Klarna;
use super::paypal::PayPal;
use crate::error::{PaymentError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::{self, Write};
use tracing::debug;

/// The capability shared by every payment method.
///
/// Implementors supply a display name and the message describing a charge.
/// An implementor that keeps the default [`charge_message`](Self::charge_message)
/// cannot process payments: every call fails with [`PaymentError::Unimplemented`].
pub trait ProcessPayment {
    /// Human-readable label of the method, fixed at construction.
    fn method_name(&self) -> &str;

    /// Builds the single line emitted when charging `amount`.
    fn charge_message(&self, _amount: Decimal) -> Result<String> {
        Err(PaymentError::Unimplemented(self.method_name().to_string()))
    }

    /// Writes the charge message for `amount` to `out` and reports success.
    fn process_payment_to(&self, out: &mut dyn Write, amount: Decimal) -> Result<bool> {
        let message = self.charge_message(amount)?;
        writeln!(out, "{message}")?;
        debug!(method = self.method_name(), %amount, "payment processed");
        Ok(true)
    }

    /// Processes a payment of `amount`, emitting the message on stdout.
    fn process_payment(&self, amount: Decimal) -> Result<bool> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.process_payment_to(&mut handle, amount)
    }
}

/// The supported payment methods.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentMethod {
    CreditCard(CreditCard),
    PayPal(PayPal),
    Klarna(Klarna),
}

impl ProcessPayment for PaymentMethod {
    fn method_name(&self) -> &str {
        match self {
            PaymentMethod::CreditCard(card) => card.method_name(),
            PaymentMethod::PayPal(paypal) => paypal.method_name(),
            PaymentMethod::Klarna(klarna) => klarna.method_name(),
        }
    }

    fn charge_message(&self, amount: Decimal) -> Result<String> {
        match self {
            PaymentMethod::CreditCard(card) => card.charge_message(amount),
            PaymentMethod::PayPal(paypal) => paypal.charge_message(amount),
            PaymentMethod::Klarna(klarna) => klarna.charge_message(amount),
        }
    }
}

impl From<CreditCard> for PaymentMethod {
    fn from(card: CreditCard) -> Self {
        Self::CreditCard(card)
    }
}

impl From<PayPal> for PaymentMethod {
    fn from(paypal: PayPal) -> Self {
        Self::PayPal(paypal)
    }
}

impl From<Klarna> for PaymentMethod {
    fn from(klarna: Klarna) -> Self {
        Self::Klarna(klarna)
    }
}

/// Formats a monetary value as dollars with two decimals (banker's rounding).
///
/// Rounding is exact on the decimal value, not on a binary float, so `2.675`
/// renders as `$2.68` and `-0.001` as `$0.00`.
pub(crate) fn dollars(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    format!("${rounded:.2}")
}
