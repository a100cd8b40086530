//! Price impact.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `((amount_in × reference_price − amount_out) / (amount_in × reference_price)) × 100`.
///
/// Zero when the expected output is zero; `None` when the arithmetic overflows.
pub fn price_impact(
    amount_in: Decimal,
    amount_out: Decimal,
    reference_price: Decimal,
) -> Option<Decimal> {
    let expected = amount_in.checked_mul(reference_price)?;
    if expected.is_zero() {
        return Some(Decimal::ZERO);
    }
    let impact = expected
        .checked_sub(amount_out)?
        .checked_div(expected)?
        .checked_mul(Decimal::ONE_HUNDRED)?;
    Some(impact.normalize())
}

/// How alarming a price impact is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ImpactSeverity {
    Low,
    Medium,
    High,
}

impl ImpactSeverity {
    /// Below 1 % is low, below 3 % is medium, anything else is high.
    pub fn from_percent(impact: Decimal) -> Self {
        if impact < Decimal::ONE {
            ImpactSeverity::Low
        } else if impact < Decimal::from(3) {
            ImpactSeverity::Medium
        } else {
            ImpactSeverity::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactSeverity::Low => "low",
            ImpactSeverity::Medium => "medium",
            ImpactSeverity::High => "high",
        }
    }
}
