//! Raw token classification.
//!
//! Rules are tried in a fixed order and the first match wins:
//!
//! 1. `field:value` (split on the first colon) becomes a date filter, a
//!    duration filter or a field-scoped search
//! 2. a bare `|` is the OR operator
//! 3. `-word` is a negated term
//! 4. text read inside quotes is an exact phrase
//! 5. anything else is a plain term

use super::token::{BoolOperator, DateField, DurationConstraint, Token};
use super::tokenizer::RawToken;

const DURATION_FIELD: &str = "duration";

/// Classify a raw token into a typed token
pub fn classify(raw: &RawToken) -> Token {
    let text = raw.text.as_str();

    if let Some((field, value)) = text.split_once(':') {
        return classify_field(field, value);
    }

    if text == "|" {
        return Token::Operator {
            value: BoolOperator::Or,
        };
    }

    if let Some(rest) = text.strip_prefix('-') {
        return Token::Not {
            value: rest.to_string(),
        };
    }

    if raw.phrase {
        return Token::ExactPhrase {
            value: text.to_string(),
        };
    }

    // Hand-built raw tokens may still carry their quotes; a lone `"` is an empty phrase
    if text.starts_with('"') && text.ends_with('"') {
        let inner = text.get(1..text.len() - 1).unwrap_or_default();
        return Token::ExactPhrase {
            value: inner.to_string(),
        };
    }

    Token::term(text)
}

fn classify_field(field: &str, value: &str) -> Token {
    if let Some(date_field) = DateField::from_field(field) {
        return Token::DateFilter {
            field: date_field,
            value: value.to_string(),
        };
    }

    if field == DURATION_FIELD {
        return Token::DurationFilter {
            value: parse_duration_filter(value),
        };
    }

    Token::FieldSearch {
        field: field.to_string(),
        value: value.to_string(),
    }
}

/// Parse the value of a `duration:` filter.
///
/// Accepts `min-max`, `>n`, `<n` and `n`. Nothing is validated: unparseable
/// numbers become NaN and ranges are not reordered.
pub fn parse_duration_filter(value: &str) -> DurationConstraint {
    if value.contains('-') {
        let mut parts = value.split('-').map(parse_number);
        let min = parts.next().unwrap_or(f64::NAN);
        let max = parts.next().unwrap_or(f64::NAN);
        return DurationConstraint::Range { min, max };
    }

    if let Some(rest) = value.strip_prefix('>') {
        return DurationConstraint::GreaterThan {
            value: parse_number(rest),
        };
    }

    if let Some(rest) = value.strip_prefix('<') {
        return DurationConstraint::LessThan {
            value: parse_number(rest),
        };
    }

    DurationConstraint::Exact {
        value: parse_number(value),
    }
}

/// Convert a string to a number the way a JavaScript `Number(string)` call does.
///
/// Blank input is 0, `Infinity` is accepted, `0x`/`0o`/`0b` prefixes give
/// integers, and everything that is not a decimal literal is NaN.
pub fn parse_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(n) = parse_radix_literal(s) {
        return n;
    }

    if !is_decimal_literal(s) {
        return f64::NAN;
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix_literal(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }

    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let mut n = 0.0_f64;
    for ch in digits.chars() {
        match ch.to_digit(radix) {
            Some(d) => n = n * radix as f64 + d as f64,
            None => return Some(f64::NAN),
        }
    }
    Some(n)
}

/// `[+-] digits [. digits] [(e|E) [+-] digits]`, with at least one mantissa digit
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        mantissa_digits += i - frac_start;
    }

    if mantissa_digits == 0 {
        return false;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}
