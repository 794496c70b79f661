//! Small shared helpers

use rust_decimal::Decimal;
use std::str::FromStr;

/// Keep only ASCII digits, the normalization every phone input applies.
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Parse a catalog price string (`"1.250,00"`: dot thousands separator,
/// comma fraction separator) into a `Decimal`. Unparsable input yields
/// `None`; callers treat those lines as zero rather than failing a total.
pub fn parse_price(price: &str) -> Option<Decimal> {
    let normalized = price.replace('.', "").replace(',', ".");
    Decimal::from_str(normalized.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("0532 123-45 67"), "05321234567");
        assert_eq!(digits_only("abc"), "");
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("300,00"), Some(Decimal::new(30000, 2)));
        assert_eq!(parse_price("1.250,50"), Some(Decimal::new(125050, 2)));
        assert_eq!(parse_price("fiyat yok"), None);
    }
}
