//! Amount formatting

/// Format `value` as currency with thousands separators and two decimals
///
/// Non-finite values render as zero, matching how they are stored.
pub fn format_amount(value: f64, symbol: &str) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{}{}.{:02}", sign, symbol, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(format_amount(0.0, "$"), "$0.00");
        assert_eq!(format_amount(999.5, "$"), "$999.50");
        assert_eq!(format_amount(253000.0, "$"), "$253,000.00");
        assert_eq!(format_amount(1234567.891, "$"), "$1,234,567.89");
    }

    #[test]
    fn test_symbol_and_sign() {
        assert_eq!(format_amount(1500.0, "€"), "€1,500.00");
        assert_eq!(format_amount(-12.5, "$"), "-$12.50");
    }

    #[test]
    fn test_non_finite_is_zero() {
        assert_eq!(format_amount(f64::NAN, "$"), "$0.00");
        assert_eq!(format_amount(f64::INFINITY, "$"), "$0.00");
    }
}
