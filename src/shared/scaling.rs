//! Pure conversion between human-readable token amounts and raw integer units.
//!
//! All math uses `rust_decimal::Decimal` so the scaling is exact.
//! No async, no network calls.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Largest decimals count `Decimal` can scale by.
const MAX_SCALE: u8 = 28;

/// Errors that can occur while scaling amounts.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalingError {
    NonPositiveAmount(String),
    Overflow { context: String },
    FractionalAmount { value: String },
    UnsupportedDecimals(u8),
    InvalidDecimal { input: String, reason: String },
}

impl fmt::Display for ScalingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalingError::NonPositiveAmount(v) => write!(f, "Amount must be positive, got {}", v),
            ScalingError::Overflow { context } => write!(f, "Overflow: {}", context),
            ScalingError::FractionalAmount { value } => {
                write!(f, "Amount has more precision than the token allows: {}", value)
            }
            ScalingError::UnsupportedDecimals(d) => write!(f, "Unsupported decimals: {}", d),
            ScalingError::InvalidDecimal { input, reason } => {
                write!(f, "Invalid decimal '{}': {}", input, reason)
            }
        }
    }
}

impl std::error::Error for ScalingError {}

/// Parse a user-entered amount. Must be a positive decimal.
pub fn parse_amount(input: &str) -> Result<Decimal, ScalingError> {
    let trimmed = input.trim();
    let value = Decimal::from_str(trimmed).map_err(|e| ScalingError::InvalidDecimal {
        input: input.to_string(),
        reason: e.to_string(),
    })?;
    if value <= Decimal::ZERO {
        return Err(ScalingError::NonPositiveAmount(trimmed.to_string()));
    }
    Ok(value.normalize())
}

/// Scale a human-readable amount into raw integer units: `amount × 10^decimals`.
///
/// Rejects amounts that would need fractional raw units.
pub fn to_raw_amount(amount: &Decimal, decimals: u8) -> Result<u128, ScalingError> {
    if decimals > MAX_SCALE {
        return Err(ScalingError::UnsupportedDecimals(decimals));
    }
    if *amount <= Decimal::ZERO {
        return Err(ScalingError::NonPositiveAmount(amount.to_string()));
    }

    let mut scaled = *amount;
    for _ in 0..decimals {
        scaled = scaled
            .checked_mul(Decimal::TEN)
            .ok_or_else(|| ScalingError::Overflow {
                context: format!("{} × 10^{}", amount, decimals),
            })?;
    }

    if !scaled.fract().is_zero() {
        return Err(ScalingError::FractionalAmount {
            value: amount.to_string(),
        });
    }

    scaled.to_u128().ok_or_else(|| ScalingError::Overflow {
        context: format!("{} × 10^{}", amount, decimals),
    })
}

/// Parse a raw integer amount string (as the aggregator returns it) and
/// scale it down: `raw ÷ 10^decimals`.
pub fn from_raw_amount(raw: &str, decimals: u8) -> Result<Decimal, ScalingError> {
    if decimals > MAX_SCALE {
        return Err(ScalingError::UnsupportedDecimals(decimals));
    }
    let value = u128::from_str(raw.trim()).map_err(|e| ScalingError::InvalidDecimal {
        input: raw.to_string(),
        reason: e.to_string(),
    })?;
    let value = i128::try_from(value).map_err(|_| ScalingError::Overflow {
        context: format!("raw amount {}", raw),
    })?;
    Decimal::try_from_i128_with_scale(value, decimals as u32)
        .map(|d| d.normalize())
        .map_err(|_| ScalingError::Overflow {
            context: format!("raw amount {} at {} decimals", raw, decimals),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1.50").unwrap(), dec("1.5"));
        assert_eq!(parse_amount(" 10 ").unwrap(), dec("10"));
        assert!(matches!(
            parse_amount("0"),
            Err(ScalingError::NonPositiveAmount(_))
        ));
        assert!(matches!(
            parse_amount("-3"),
            Err(ScalingError::NonPositiveAmount(_))
        ));
        assert!(matches!(
            parse_amount("abc"),
            Err(ScalingError::InvalidDecimal { .. })
        ));
        assert!(parse_amount("").is_err());
    }

    #[test]
    fn test_to_raw_amount_stellar_7_decimals() {
        assert_eq!(to_raw_amount(&dec("1"), 7).unwrap(), 10_000_000);
        assert_eq!(to_raw_amount(&dec("0.0000001"), 7).unwrap(), 1);
        assert_eq!(to_raw_amount(&dec("12.5"), 7).unwrap(), 125_000_000);
    }

    #[test]
    fn test_to_raw_amount_evm_18_decimals() {
        assert_eq!(
            to_raw_amount(&dec("1.5"), 18).unwrap(),
            1_500_000_000_000_000_000
        );
    }

    #[test]
    fn test_to_raw_amount_rejects_sub_unit_precision() {
        assert!(matches!(
            to_raw_amount(&dec("0.00000001"), 7),
            Err(ScalingError::FractionalAmount { .. })
        ));
    }

    #[test]
    fn test_to_raw_amount_rejects_non_positive() {
        assert!(to_raw_amount(&Decimal::ZERO, 6).is_err());
        assert!(to_raw_amount(&dec("-1"), 6).is_err());
    }

    #[test]
    fn test_from_raw_amount() {
        assert_eq!(from_raw_amount("1500000", 6).unwrap(), dec("1.5"));
        assert_eq!(
            from_raw_amount("2000000000000000000", 18).unwrap(),
            dec("2")
        );
        assert_eq!(from_raw_amount("0", 18).unwrap(), Decimal::ZERO);
        assert!(from_raw_amount("1.5", 6).is_err());
        assert!(from_raw_amount("-1", 6).is_err());
        assert!(matches!(
            from_raw_amount("1", 40),
            Err(ScalingError::UnsupportedDecimals(40))
        ));
    }
}
