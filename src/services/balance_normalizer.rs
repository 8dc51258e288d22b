use crate::models::data_api::TokenPrice;

use super::decimal_string::DecimalString;

/// Converts base-10 digits to a float by `result * 10 + digit`.
///
/// Loses precision past ~15-17 significant digits. Kept this way so the
/// float matches previously displayed values; `format_units` is the exact path.
pub fn digits_to_f64(value: &str) -> Option<f64> {
    value.chars().try_fold(0.0_f64, |result, c| {
        c.to_digit(10).map(|digit| result * 10.0 + f64::from(digit))
    })
}

/// Scales a raw smallest-unit amount down by `decimals` places.
pub fn normalize(raw: Option<&str>, decimals: Option<i64>) -> Option<f64> {
    let raw = raw.filter(|r| !r.is_empty())?;
    let base = digits_to_f64(raw)?;

    match decimals {
        // Out-of-range exponents saturate to infinity, so the balance underflows to 0.
        Some(decimals) if decimals > 0 => Some(base / 10f64.powf(decimals as f64)),
        _ => Some(base),
    }
}

/// ERC-20 `decimals` is a uint8; anything above can't be formatted sensibly.
pub const MAX_FORMAT_DECIMALS: i64 = u8::MAX as i64;

/// Exact decimal rendering of a raw amount, trailing zeros trimmed.
/// `None` for non-digit input or `decimals` above `MAX_FORMAT_DECIMALS`.
pub fn format_units(raw: &str, decimals: Option<i64>) -> Option<String> {
    let amount = DecimalString::parse(raw)?;

    let decimals = match decimals {
        Some(decimals) if decimals > MAX_FORMAT_DECIMALS => return None,
        Some(decimals) if decimals > 0 => decimals as usize,
        _ => return Some(amount.into_string()),
    };

    let mut amount_str = amount.as_str().trim_start_matches('0').to_string();
    if amount_str.len() <= decimals {
        amount_str.insert_str(0, &"0".repeat(decimals - amount_str.len() + 1));
    }
    let split = amount_str.len() - decimals;
    amount_str.insert(split, '.');

    Some(
        amount_str
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string(),
    )
}

/// Value of the first price tagged "usd" (any case).
pub fn usd_price(prices: &[TokenPrice]) -> Option<f64> {
    prices
        .iter()
        .find(|price| price.currency.eq_ignore_ascii_case("usd"))
        .and_then(|price| price.value.as_f64())
}

pub fn usd_value(balance: Option<f64>, price: Option<f64>) -> Option<f64> {
    Some(balance? * price?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::scalars::PriceValue;

    fn price(currency: &str, value: PriceValue) -> TokenPrice {
        TokenPrice {
            currency: currency.to_string(),
            value,
        }
    }

    #[test]
    fn normalizes_one_ether() {
        assert_eq!(normalize(Some("1000000000000000000"), Some(18)), Some(1.0));
    }

    #[test]
    fn normalizes_zero_and_absent() {
        assert_eq!(normalize(Some("0"), Some(18)), Some(0.0));
        assert_eq!(normalize(None, Some(18)), None);
        assert_eq!(normalize(Some(""), Some(18)), None);
    }

    #[test]
    fn missing_or_non_positive_decimals_leave_value_unscaled() {
        assert_eq!(normalize(Some("5"), None), Some(5.0));
        assert_eq!(normalize(Some("5"), Some(0)), Some(5.0));
        assert_eq!(normalize(Some("5"), Some(-2)), Some(5.0));
    }

    #[test]
    fn usdc_style_six_decimals() {
        assert_eq!(normalize(Some("2500000"), Some(6)), Some(2.5));
    }

    #[test]
    fn non_digit_raw_string_has_no_balance() {
        assert_eq!(normalize(Some("12x"), Some(2)), None);
    }

    #[test]
    fn formats_exactly_without_float() {
        assert_eq!(format_units("1000000000000000000", Some(18)).as_deref(), Some("1"));
        assert_eq!(format_units("1500000", Some(6)).as_deref(), Some("1.5"));
        assert_eq!(format_units("1", Some(18)).as_deref(), Some("0.000000000000000001"));
        assert_eq!(format_units("0", Some(18)).as_deref(), Some("0"));
        assert_eq!(format_units("0042", None).as_deref(), Some("42"));
        assert_eq!(format_units("000", None).as_deref(), Some("0"));
        assert_eq!(
            format_units("123456789012345678901234567890", Some(18)).as_deref(),
            Some("123456789012.34567890123456789")
        );
        assert_eq!(format_units("", Some(18)), None);
    }

    #[test]
    fn oversized_decimals_are_not_formatted() {
        assert_eq!(format_units("1", Some(255)).map(|s| s.len()), Some(257));
        assert_eq!(format_units("1", Some(256)), None);
        assert_eq!(format_units("1", Some(100_000_000)), None);
        assert_eq!(format_units("1", Some(i64::MAX)), None);
    }

    #[test]
    fn huge_decimals_underflow_the_float_balance_to_zero() {
        assert_eq!(normalize(Some("1"), Some(100_000_000)), Some(0.0));
        assert_eq!(normalize(Some("1"), Some(4_294_967_296)), Some(0.0));
    }

    #[test]
    fn picks_first_usd_price_case_insensitively() {
        let prices = vec![
            price("eur", PriceValue::Number(9.0)),
            price("USD", PriceValue::Text("10.0".to_string())),
            price("usd", PriceValue::Number(11.0)),
        ];
        assert_eq!(usd_price(&prices), Some(10.0));
        assert_eq!(usd_price(&[price("eur", PriceValue::Number(9.0))]), None);
        assert_eq!(usd_price(&[]), None);
    }

    #[test]
    fn usd_value_needs_both_operands() {
        assert_eq!(usd_value(Some(2.5), Some(10.0)), Some(25.0));
        assert_eq!(usd_value(None, Some(10.0)), None);
        assert_eq!(usd_value(Some(2.5), None), None);
    }
}
