//! Parsing of user-typed values. Everything here is lenient about
//! surrounding whitespace and strict about content.

use storefront_core::validation::validate_quantity;
use storefront_core::{Money, ValidationError};

/// Turns `"0, 2,x,9"` into catalog positions.
///
/// Each comma-separated token is trimmed and parsed. Tokens that are not
/// non-negative integers, or that fall outside `0..catalog_len`, are
/// dropped. Repeats are kept.
pub fn parse_selection(raw: &str, catalog_len: usize) -> Vec<usize> {
    raw.split(',')
        .filter_map(|token| token.trim().parse::<usize>().ok())
        .filter(|&index| index < catalog_len)
        .collect()
}

/// Parses a positive order quantity.
pub fn parse_quantity(raw: &str) -> Result<i64, ValidationError> {
    let qty: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "expected a whole number".to_string(),
        })?;
    validate_quantity(qty)?;
    Ok(qty)
}

/// Parses a price bound such as `"99.5"`.
pub fn parse_price(raw: &str) -> Result<Money, ValidationError> {
    raw.parse()
}

/// Parses a finite rating threshold.
pub fn parse_rating(raw: &str) -> Result<f64, ValidationError> {
    match raw.trim().parse::<f64>() {
        Ok(rating) if rating.is_finite() => Ok(rating),
        _ => Err(ValidationError::InvalidFormat {
            field: "rating".to_string(),
            reason: "expected a number".to_string(),
        }),
    }
}

/// Case-insensitive "yes".
pub fn is_yes(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection_drops_bad_tokens() {
        assert_eq!(parse_selection("0, 2,x,9", 4), vec![0, 2]);
        assert_eq!(parse_selection("1,1", 4), vec![1, 1]);
        assert_eq!(parse_selection("-1,4", 4), Vec::<usize>::new());
        assert_eq!(parse_selection("", 4), Vec::<usize>::new());
        assert_eq!(parse_selection(" 3 ", 4), vec![3]);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(" 3 ").unwrap(), 3);
        assert!(matches!(
            parse_quantity("0"),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(parse_quantity("-2").is_err());
        assert!(matches!(
            parse_quantity("three"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating("4.5").unwrap(), 4.5);
        assert!(parse_rating("NaN").is_err());
        assert!(parse_rating("inf").is_err());
        assert!(parse_rating("good").is_err());
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("YES"));
        assert!(is_yes(" yes\n"));
        assert!(!is_yes("y"));
        assert!(!is_yes("no"));
    }
}
