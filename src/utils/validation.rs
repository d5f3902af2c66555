use crate::utils::error::{CheckError, Result};

/// Parses the leading unsigned decimal number of an input token.
///
/// An optional `+` is followed by the longest run of ASCII digits; anything
/// after that run is ignored (`12abc` reads as 12). A token without leading
/// digits (including negative numbers) or a value above `u64::MAX` is
/// invalid input.
pub fn validate_unsigned(token: &str) -> Result<u64> {
    let invalid = || CheckError::InvalidInput {
        token: Some(token.to_string()),
    };

    let unsigned = token.strip_prefix('+').unwrap_or(token);
    let digit_count = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    let (digits, rest) = unsigned.split_at(digit_count);

    if digits.is_empty() {
        tracing::debug!("Rejected input token {:?}: no leading digits", token);
        return Err(invalid());
    }
    if !rest.is_empty() {
        tracing::debug!("Ignoring trailing {:?} after {}", rest, digits);
    }

    digits.parse::<u64>().map_err(|e| {
        tracing::debug!("Rejected input token {:?}: {}", token, e);
        invalid()
    })
}

/// Narrows the input to the `u32` count used by the factorial.
///
/// Values that do not fit saturate to `u32::MAX`, which still reports overflow.
pub fn narrow_count(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
