//! Application layer orchestrating payment requests.
//!
//! This module defines `Checkout`, which turns each incoming request into a
//! payment method, processes it against an output sink and records a receipt.

pub mod checkout;
