use std::{fmt, str::FromStr};

use fractic_server_error::ServerError;

use crate::errors::{InvalidFinancialLoss, NegativeFinancialLoss};

#[derive(Debug)]
pub(crate) struct FinancialLossModel(pub f64);
impl FromStr for FinancialLossModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Ok(FinancialLossModel(0.0));
        }
        let amount = raw
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite())
            .ok_or_else(|| InvalidFinancialLoss::new(raw))?;
        if amount < 0.0 {
            return Err(NegativeFinancialLoss::new(amount));
        }
        Ok(FinancialLossModel(amount))
    }
}

impl fmt::Display for FinancialLossModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Always keep a decimal mark so the column reads back as a decimal.
        if self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Into<f64> for FinancialLossModel {
    fn into(self) -> f64 {
        self.0
    }
}
