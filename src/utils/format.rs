//! Number formatting for table cells and summary cards.
//!
//! Missing metrics render as `—`, never as `0`.

use crate::constants::EMPTY_VALUE;

/// Maximum fraction digits kept when formatting decimals
const MAX_FRACTION_DIGITS: usize = 3;

/// Format an integer metric with `,` thousands separators
pub fn format_number(value: Option<i64>) -> String {
    match value {
        Some(n) => group_thousands(&n.to_string()),
        None => EMPTY_VALUE.to_string(),
    }
}

/// Format a decimal metric with thousands separators and at most three fraction digits
pub fn format_decimal(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, v);
            let trimmed = trim_fraction(&fixed);
            match trimmed.split_once('.') {
                Some((int_part, frac)) => format!("{}.{}", group_thousands(int_part), frac),
                None => group_thousands(trimmed),
            }
        }
        Some(v) => v.to_string(),
        None => EMPTY_VALUE.to_string(),
    }
}

/// Format a decimal metric as-is, without grouping (used for frequencies)
pub fn format_plain(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => EMPTY_VALUE.to_string(),
    }
}

/// Format an optional text field
pub fn format_text(value: Option<&str>) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s.to_string(),
        _ => EMPTY_VALUE.to_string(),
    }
}

fn trim_fraction(fixed: &str) -> &str {
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed
    }
}

fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // "-0" after rounding a tiny negative
    if grouped == "0" {
        return grouped;
    }
    format!("{}{}", sign, grouped)
}
