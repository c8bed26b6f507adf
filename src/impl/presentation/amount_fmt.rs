use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Format a loss amount in euros the French way: thousands grouped, comma as
/// decimal mark, two decimals, symbol last (ex. "1 250,50 €").
pub fn format_loss(amount: f64) -> String {
    let currency = Currency::EUR;
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!(
        "{}{},{:02} {}",
        sign,
        (cents / 100).to_formatted_string(&Locale::fr),
        cents % 100,
        currency.symbol(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts() {
        assert_eq!(format_loss(12.5), "12,50 €");
        assert_eq!(format_loss(0.0), "0,00 €");
        assert_eq!(format_loss(0.999), "1,00 €");
    }

    #[test]
    fn test_large_amounts_are_grouped() {
        let formatted = format_loss(1250.5);
        assert!(formatted.starts_with('1'));
        assert!(formatted.ends_with("250,50 €"));
        assert!(formatted.len() > "1250,50 €".len());
    }
}
