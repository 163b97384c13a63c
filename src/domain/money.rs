use std::fmt;

/// Money is represented as integer cents to avoid floating-point precision issues.
/// 1 unit = 100 cents, so 50.00 = 5000 cents.
pub type Cents = i64;

/// Format cents as a human-readable decimal string.
/// Example: 5000 -> "50.00", -1234 -> "-12.34"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.abs();
    let units = abs_cents / 100;
    let remainder = abs_cents % 100;
    format!("{}{}.{:02}", sign, units, remainder)
}

/// Parse a decimal amount string into cents.
/// Example: "50.00" -> 5000, "12.5" -> 1250, "100" -> 10000
///
/// Amounts are always non-negative: direction is carried by the entry sign,
/// so a leading minus is rejected rather than interpreted.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    if input.starts_with('-') {
        return Err(ParseCentsError::Negative);
    }

    let parts: Vec<&str> = input.split('.').collect();
    match parts.len() {
        1 => {
            // No decimal point, treat as whole units
            let units: i64 = parts[0]
                .parse()
                .map_err(|_| ParseCentsError::InvalidFormat)?;
            units.checked_mul(100).ok_or(ParseCentsError::OutOfRange)
        }
        2 => {
            let units: i64 = if parts[0].is_empty() {
                0
            } else {
                parts[0]
                    .parse()
                    .map_err(|_| ParseCentsError::InvalidFormat)?
            };

            // Handle decimal part - pad or truncate to 2 digits
            let decimal_str = parts[1];
            let decimal_cents: i64 = match decimal_str.len() {
                0 => 0,
                1 => {
                    // Single digit like "5" means 50 cents
                    decimal_str
                        .parse::<i64>()
                        .map_err(|_| ParseCentsError::InvalidFormat)?
                        * 10
                }
                2 => decimal_str
                    .parse()
                    .map_err(|_| ParseCentsError::InvalidFormat)?,
                _ => {
                    // More than 2 decimal places - truncate. The input is
                    // arbitrary UTF-8, so truncation must stay on a char
                    // boundary; anything non-ASCII there is malformed anyway.
                    decimal_str
                        .get(..2)
                        .ok_or(ParseCentsError::InvalidFormat)?
                        .parse()
                        .map_err(|_| ParseCentsError::InvalidFormat)?
                }
            };

            units
                .checked_mul(100)
                .and_then(|cents| cents.checked_add(decimal_cents))
                .ok_or(ParseCentsError::OutOfRange)
        }
        _ => Err(ParseCentsError::InvalidFormat),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    InvalidFormat,
    Negative,
    OutOfRange,
}

impl fmt::Display for ParseCentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCentsError::InvalidFormat => write!(f, "invalid amount format"),
            ParseCentsError::Negative => write!(f, "amount must not be negative"),
            ParseCentsError::OutOfRange => write!(f, "amount out of range"),
        }
    }
}

impl std::error::Error for ParseCentsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(5000), "50.00");
        assert_eq!(format_cents(1234), "12.34");
        assert_eq!(format_cents(100), "1.00");
        assert_eq!(format_cents(1), "0.01");
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(-5000), "-50.00");
        assert_eq!(format_cents(-1), "-0.01");
    }

    #[test]
    fn test_parse_cents() {
        assert_eq!(parse_cents("50.00"), Ok(5000));
        assert_eq!(parse_cents("50"), Ok(5000));
        assert_eq!(parse_cents("12.34"), Ok(1234));
        assert_eq!(parse_cents("12.5"), Ok(1250));
        assert_eq!(parse_cents("0.01"), Ok(1));
        assert_eq!(parse_cents(".50"), Ok(50));
        assert_eq!(parse_cents("100.999"), Ok(10099)); // Truncates
        assert_eq!(parse_cents(" 7.25 "), Ok(725));
    }

    #[test]
    fn test_parse_cents_invalid() {
        assert!(parse_cents("abc").is_err());
        assert!(parse_cents("12.34.56").is_err());
        assert!(parse_cents("").is_err());
        assert_eq!(parse_cents("-50.00"), Err(ParseCentsError::Negative));
    }

    #[test]
    fn test_parse_cents_multibyte_decimal_is_rejected_not_panicking() {
        assert_eq!(parse_cents("1.€0"), Err(ParseCentsError::InvalidFormat));
        assert_eq!(parse_cents("1.5€0"), Err(ParseCentsError::InvalidFormat));
        assert_eq!(parse_cents("€"), Err(ParseCentsError::InvalidFormat));
    }

    #[test]
    fn test_parse_cents_overflow_is_rejected_not_panicking() {
        // i64::MAX / 100 < 92233720368547759
        assert_eq!(
            parse_cents("92233720368547759"),
            Err(ParseCentsError::OutOfRange)
        );
        assert_eq!(
            parse_cents("92233720368547758.99"),
            Err(ParseCentsError::OutOfRange)
        );
        assert_eq!(parse_cents(&i64::MAX.to_string()), Err(ParseCentsError::OutOfRange));
    }
}
