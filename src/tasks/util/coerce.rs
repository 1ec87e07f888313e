use serde_json::Value;

/// Reads an integer out of a loosely typed JSON value.
///
/// Numbers are truncated toward zero. Strings yield their leading decimal
/// integer after optional whitespace and sign, so `"8"`, `" 8"` and `"8s"` all
/// give 8. Anything else, including out of range values, gives `None`.
pub fn parse_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Some(int);
            }

            let float = number.as_f64()?;
            if !float.is_finite() || float.abs() >= i64::MAX as f64 {
                return None;
            }

            Some(float.trunc() as i64)
        }
        Value::String(text) => parse_int_str(text),
        _ => None,
    }
}

fn parse_int_str(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];

    if digits.is_empty() {
        return None;
    }

    let int = digits.parse::<i64>().ok()?;
    Some(if negative { -int } else { int })
}

/// Whether a JSON value counts as set when used as a fallback condition.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{is_truthy, parse_int};

    #[test]
    fn parses_numbers() {
        assert_eq!(parse_int(&json!(8)), Some(8));
        assert_eq!(parse_int(&json!(-3)), Some(-3));
        assert_eq!(parse_int(&json!(5.9)), Some(5));
        assert_eq!(parse_int(&json!(-5.9)), Some(-5));
    }

    #[test]
    fn parses_leading_integer_of_strings() {
        assert_eq!(parse_int(&json!("10")), Some(10));
        assert_eq!(parse_int(&json!("  8")), Some(8));
        assert_eq!(parse_int(&json!("8s")), Some(8));
        assert_eq!(parse_int(&json!("+5")), Some(5));
        assert_eq!(parse_int(&json!("-5")), Some(-5));
        assert_eq!(parse_int(&json!("5.5")), Some(5));
    }

    #[test]
    fn rejects_non_numeric_values() {
        assert_eq!(parse_int(&json!("abc")), None);
        assert_eq!(parse_int(&json!("")), None);
        assert_eq!(parse_int(&json!("-")), None);
        assert_eq!(parse_int(&json!(null)), None);
        assert_eq!(parse_int(&json!(true)), None);
        assert_eq!(parse_int(&json!([8])), None);
        assert_eq!(parse_int(&json!("99999999999999999999")), None);
    }

    #[test]
    fn truthiness() {
        assert!(is_truthy(&json!("1080p")));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!({})));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(null)));
    }
}
