//! Formatting utilities used for CLI and export outputs.

/// Format a kilometre value with thousands separators, dropping the
/// fractional part: 12345.7 → "12,345".
pub fn format_km(km: f64) -> String {
    let negative = km < 0.0;
    let whole = km.abs().trunc() as u64;

    let digits = whole.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    if negative {
        format!("-{}", out)
    } else {
        out
    }
}

/// Format a money amount with the configured currency symbol.
pub fn format_money(amount: f64, currency: &str) -> String {
    format!("{}{:.2}", currency, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn km_thousands_separators() {
        assert_eq!(format_km(0.0), "0");
        assert_eq!(format_km(999.0), "999");
        assert_eq!(format_km(1000.0), "1,000");
        assert_eq!(format_km(12345.7), "12,345");
        assert_eq!(format_km(1234567.0), "1,234,567");
        assert_eq!(format_km(-1500.0), "-1,500");
    }

    #[test]
    fn money_two_decimals() {
        assert_eq!(format_money(12.5, "€"), "€12.50");
        assert_eq!(format_money(0.0, "$"), "$0.00");
    }
}
