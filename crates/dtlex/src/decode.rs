//! Integer decoding for digit spans.
//!
//! Zero-allocation, overflow-checked. Accepts an optional leading `-` or `+`
//! followed by at least one ASCII digit.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DecodeError {
    /// Empty, sign-only, or contains a non-digit.
    Invalid,
    /// Does not fit `i64`.
    Overflow,
}

/// Parse an optionally signed decimal integer.
///
/// Negative values accumulate downwards so `i64::MIN` decodes without
/// overflowing.
pub(crate) fn parse_signed(s: &str) -> Result<i64, DecodeError> {
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    if digits.is_empty() {
        return Err(DecodeError::Invalid);
    }

    let mut result: i64 = 0;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            return Err(DecodeError::Invalid);
        }
        let digit = i64::from(b - b'0');
        result = result.checked_mul(10).ok_or(DecodeError::Overflow)?;
        result = if negative {
            result.checked_sub(digit)
        } else {
            result.checked_add(digit)
        }
        .ok_or(DecodeError::Overflow)?;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned() {
        assert_eq!(parse_signed("0"), Ok(0));
        assert_eq!(parse_signed("007"), Ok(7));
        assert_eq!(parse_signed("1700000000"), Ok(1_700_000_000));
    }

    #[test]
    fn signed() {
        assert_eq!(parse_signed("-5"), Ok(-5));
        assert_eq!(parse_signed("+42"), Ok(42));
        assert_eq!(parse_signed("-0"), Ok(0));
    }

    #[test]
    fn extremes() {
        assert_eq!(parse_signed("9223372036854775807"), Ok(i64::MAX));
        assert_eq!(parse_signed("-9223372036854775808"), Ok(i64::MIN));
        assert_eq!(
            parse_signed("9223372036854775808"),
            Err(DecodeError::Overflow)
        );
        assert_eq!(
            parse_signed("99999999999999999999999"),
            Err(DecodeError::Overflow)
        );
    }

    #[test]
    fn invalid() {
        assert_eq!(parse_signed(""), Err(DecodeError::Invalid));
        assert_eq!(parse_signed("-"), Err(DecodeError::Invalid));
        assert_eq!(parse_signed("12a"), Err(DecodeError::Invalid));
        assert_eq!(parse_signed(".5"), Err(DecodeError::Invalid));
        assert_eq!(parse_signed("--1"), Err(DecodeError::Invalid));
    }
}
