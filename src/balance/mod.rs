//! Bank balance value object.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BalanceError {
    #[error("amount must be a valid number")]
    InvalidAmount(f64),

    #[error("amount must be a valid number")]
    NotANumber(String),
}

/// A single running balance. Rejected operations leave it untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Balance {
    amount: f64,
}

impl Balance {
    pub fn new(initial: f64) -> Result<Self, BalanceError> {
        if !initial.is_finite() {
            return Err(BalanceError::InvalidAmount(initial));
        }
        Ok(Self { amount: initial })
    }

    /// Add `delta` (which may be negative) to the balance.
    pub fn increment(&mut self, delta: f64) -> Result<(), BalanceError> {
        if !delta.is_finite() {
            return Err(BalanceError::InvalidAmount(delta));
        }
        self.amount += delta;
        Ok(())
    }

    /// Like [`Balance::increment`], for amounts that arrive untyped.
    /// Strings, booleans, null and containers are refused even when they look numeric.
    pub fn increment_value(&mut self, delta: &Value) -> Result<(), BalanceError> {
        match delta.as_f64() {
            Some(amount) => self.increment(amount),
            None => Err(BalanceError::NotANumber(delta.to_string())),
        }
    }

    pub fn reset(&mut self) {
        self.amount = 0.0;
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}
