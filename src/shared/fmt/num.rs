//! Number formatting utilities for human-readable display.
//!
//! Handles f64 values: thousands separators, K/M/B abbreviation for stat
//! cards and charts, and the fixed/exponential rate display of the swap widget.

const THOUSAND: f64 = 1e3;
const MILLION: f64 = 1e6;
const BILLION: f64 = 1e9;

/// Group the integer digits of a formatted number in threes and drop
/// trailing fractional zeros: `"-1234.50"` becomes `"-1,234.5"`.
pub fn with_separators(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_digits, fraction) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, frac.trim_end_matches('0')),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(int_digits.len() + int_digits.len() / 3);
    for (i, ch) in int_digits.chars().enumerate() {
        if i > 0 && (int_digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if fraction.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, fraction)
    }
}

/// Fixed decimal places, then [`with_separators`]. Balances use 7.
pub fn display_with_decimals(amount: f64, decimals: usize) -> String {
    with_separators(&format!("{:.1$}", amount, decimals))
}

fn abbreviate_with(value: f64, suffix_digits: usize, plain_digits: usize, tiers: &[(f64, &str)]) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();

    for (threshold, suffix) in tiers {
        if abs >= *threshold {
            return format!(
                "{}{:.prec$}{}",
                sign,
                abs / threshold,
                suffix,
                prec = suffix_digits
            );
        }
    }

    format!("{}{:.prec$}", sign, abs, prec = plain_digits)
}

/// Abbreviate with B/M/K and one decimal; below 1,000 the value keeps two decimals.
///
/// `999.0 → "999.00"`, `1000.0 → "1.0K"`, `999_999.0 → "1000.0K"`, `1e6 → "1.0M"`.
pub fn abbreviate(value: f64) -> String {
    abbreviate_with(
        value,
        1,
        2,
        &[(BILLION, "B"), (MILLION, "M"), (THOUSAND, "K")],
    )
}

/// [`abbreviate`] with a leading `$`, as on the TVL chart axis.
pub fn abbreviate_usd(value: f64) -> String {
    let formatted = abbreviate(value);
    match formatted.strip_prefix('-') {
        Some(rest) => format!("-${}", rest),
        None => format!("${}", formatted),
    }
}

/// Transaction-list amounts: M/K with two decimals, otherwise four decimals.
pub fn history_amount(value: f64) -> String {
    abbreviate_with(value, 2, 4, &[(MILLION, "M"), (THOUSAND, "K")])
}

/// Exchange-rate display: exponential below 0.0001, six fixed decimals otherwise.
pub fn rate(value: f64) -> String {
    if value > 0.0 && value < 0.0001 {
        format!("{:.2e}", value)
    } else {
        format!("{:.6}", value)
    }
}

/// Percentage with two decimals, e.g. `0.05%`.
pub fn percent(value: f64) -> String {
    format!("{:.2}%", value)
}
