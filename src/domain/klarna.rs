use super::method::{ProcessPayment, dollars};
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use std::num::NonZeroU32;

/// Number of equal installments a Klarna payment is split into.
///
/// Always at least one, so splitting an amount never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallmentPlan(NonZeroU32);

impl InstallmentPlan {
    pub const DEFAULT_INSTALLMENTS: u32 = 4;

    pub fn new(installments: u32) -> Result<Self> {
        NonZeroU32::new(installments).map(Self).ok_or_else(|| {
            PaymentError::ValidationError("Installments must be positive".to_string())
        })
    }

    pub fn installments(&self) -> u32 {
        self.0.get()
    }

    /// Amount due per installment.
    pub fn split(&self, amount: Decimal) -> Decimal {
        amount / Decimal::from(self.0.get())
    }
}

impl Default for InstallmentPlan {
    fn default() -> Self {
        Self(NonZeroU32::new(Self::DEFAULT_INSTALLMENTS).unwrap_or(NonZeroU32::MIN))
    }
}

impl TryFrom<u32> for InstallmentPlan {
    type Error = PaymentError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

/// A Klarna "buy now, pay later" payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Klarna {
    account_id: String,
    plan: InstallmentPlan,
}

impl Klarna {
    pub const METHOD_NAME: &'static str = "Klarna";

    /// Creates a Klarna payment with the default plan of four installments.
    pub fn new(account_id: impl Into<String>) -> Self {
        Self::with_plan(account_id, InstallmentPlan::default())
    }

    pub fn with_plan(account_id: impl Into<String>, plan: InstallmentPlan) -> Self {
        Self {
            account_id: account_id.into(),
            plan,
        }
    }

    /// Fails with a validation error when `installments` is zero.
    pub fn with_installments(account_id: impl Into<String>, installments: u32) -> Result<Self> {
        Ok(Self::with_plan(account_id, InstallmentPlan::new(installments)?))
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn installments(&self) -> u32 {
        self.plan.installments()
    }
}

impl ProcessPayment for Klarna {
    fn method_name(&self) -> &str {
        Self::METHOD_NAME
    }

    fn charge_message(&self, amount: Decimal) -> Result<String> {
        Ok(format!(
            "Processing Klarna payment of {} as {} installments of {} for account {}...",
            dollars(amount),
            self.plan.installments(),
            dollars(self.plan.split(amount)),
            self.account_id
        ))
    }
}
