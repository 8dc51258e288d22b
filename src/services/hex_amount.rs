use super::decimal_string::DecimalString;

/// Converts a hex amount (`0x`/`0X` prefix optional) into base-10 digits.
///
/// Decoding is lenient: characters that are not hex digits are skipped
/// instead of failing the whole amount. A bare prefix decodes to `"0"`.
pub fn hex_to_decimal(hex: Option<&str>) -> Option<String> {
    let hex = hex?;
    let digits = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex);

    let decimal = digits
        .chars()
        .filter_map(|c| c.to_digit(16))
        .fold(DecimalString::zero(), |acc, digit| {
            acc.multiply_by_small(16).add_small(digit)
        });

    Some(decimal.into_string())
}
