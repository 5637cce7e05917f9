use super::method::{ProcessPayment, dollars};
use crate::error::Result;
use rust_decimal::Decimal;
use std::fmt;

/// A credit card payment.
///
/// The card number and holder name stay private to this type; callers only
/// ever see the last four characters of the number. `Debug` output omits the
/// holder entirely.
#[derive(Clone, PartialEq, Eq)]
pub struct CreditCard {
    card_number: String,
    holder_name: String,
}

impl CreditCard {
    pub const METHOD_NAME: &'static str = "Credit Card";

    pub fn new(card_number: impl Into<String>, holder_name: impl Into<String>) -> Self {
        Self {
            card_number: card_number.into(),
            holder_name: holder_name.into(),
        }
    }

    /// The last four characters of the card number, or the whole number if shorter.
    pub fn last_four(&self) -> &str {
        let len = self.card_number.chars().count();
        match self.card_number.char_indices().nth(len.saturating_sub(4)) {
            Some((start, _)) => &self.card_number[start..],
            None => &self.card_number,
        }
    }
}

impl fmt::Debug for CreditCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreditCard")
            .field("card_number", &format_args!("****{}", self.last_four()))
            .finish_non_exhaustive()
    }
}

impl ProcessPayment for CreditCard {
    fn method_name(&self) -> &str {
        Self::METHOD_NAME
    }

    fn charge_message(&self, amount: Decimal) -> Result<String> {
        Ok(format!(
            "Charging {} to card {}...",
            dollars(amount),
            self.last_four()
        ))
    }
}
