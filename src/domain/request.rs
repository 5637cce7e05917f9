use super::credit_card::CreditCard;
use super::klarna::{InstallmentPlan, Klarna};
use super::method::PaymentMethod;
use super::paypal::PayPal;
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind {
    CreditCard,
    #[serde(rename = "paypal")]
    PayPal,
    Klarna,
}

/// A caller's request to charge `amount` with one payment method.
///
/// Only the fields the chosen method needs have to be present.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentRequest {
    pub method: MethodKind,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(default)]
    pub card_number: Option<String>,
    #[serde(default)]
    pub holder_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub installments: Option<u32>,
}

impl PaymentRequest {
    /// Builds the payment method described by this request.
    ///
    /// Klarna requests without an explicit installment count use `default_plan`.
    pub fn into_method(self, default_plan: InstallmentPlan) -> Result<PaymentMethod> {
        let method = match self.method {
            MethodKind::CreditCard => CreditCard::new(
                required(self.card_number, "card_number")?,
                required(self.holder_name, "holder_name")?,
            )
            .into(),
            MethodKind::PayPal => PayPal::new(required(self.email, "email")?).into(),
            MethodKind::Klarna => {
                let plan = match self.installments {
                    Some(n) => InstallmentPlan::new(n)?,
                    None => default_plan,
                };
                Klarna::with_plan(required(self.account_id, "account_id")?, plan).into()
            }
        };
        Ok(method)
    }
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    value.ok_or_else(|| PaymentError::ValidationError(format!("Missing field: {field}")))
}
