use serde::Serialize;
use std::fmt;

/// Boolean operator symbols understood by the query language.
///
/// Only `Or` is produced by the tokenizer (from a bare `|`); `And` is the
/// implicit default between terms and `Not` is reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BoolOperator {
    And,
    Or,
    Not,
}

impl BoolOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoolOperator::And => "AND",
            BoolOperator::Or => "OR",
            BoolOperator::Not => "NOT",
        }
    }
}

impl fmt::Display for BoolOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field of a date filter (`after:` / `before:`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DateField {
    After,
    Before,
}

impl DateField {
    /// Match a field name exactly (case-sensitive)
    pub fn from_field(field: &str) -> Option<Self> {
        match field {
            "after" => Some(DateField::After),
            "before" => Some(DateField::Before),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DateField::After => "after",
            DateField::Before => "before",
        }
    }
}

/// Numeric constraint on a quiz duration (`duration:10-20`, `duration:>15`, ...)
///
/// Values that fail to parse are carried as `f64::NAN`. Equality treats two
/// NaN bounds as equal so that parsing the same input twice compares equal.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DurationConstraint {
    Range { min: f64, max: f64 },
    GreaterThan { value: f64 },
    LessThan { value: f64 },
    Exact { value: f64 },
}

impl DurationConstraint {
    /// Check if any bound of the constraint is NaN
    pub fn has_nan(&self) -> bool {
        match *self {
            DurationConstraint::Range { min, max } => min.is_nan() || max.is_nan(),
            DurationConstraint::GreaterThan { value }
            | DurationConstraint::LessThan { value }
            | DurationConstraint::Exact { value } => value.is_nan(),
        }
    }

    /// Check whether a duration satisfies the constraint.
    ///
    /// Comparisons against NaN are false, so a malformed constraint matches nothing.
    /// Ranges are inclusive and are not reordered when `min > max`.
    pub fn contains(&self, duration: f64) -> bool {
        match *self {
            DurationConstraint::Range { min, max } => duration >= min && duration <= max,
            DurationConstraint::GreaterThan { value } => duration > value,
            DurationConstraint::LessThan { value } => duration < value,
            DurationConstraint::Exact { value } => duration == value,
        }
    }
}

fn same_bound(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

impl PartialEq for DurationConstraint {
    fn eq(&self, other: &Self) -> bool {
        use DurationConstraint::*;

        match (*self, *other) {
            (Range { min: a, max: b }, Range { min: c, max: d }) => {
                same_bound(a, c) && same_bound(b, d)
            }
            (GreaterThan { value: a }, GreaterThan { value: b })
            | (LessThan { value: a }, LessThan { value: b })
            | (Exact { value: a }, Exact { value: b }) => same_bound(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for DurationConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationConstraint::Range { min, max } => write!(f, "{}-{}", min, max),
            DurationConstraint::GreaterThan { value } => write!(f, ">{}", value),
            DurationConstraint::LessThan { value } => write!(f, "<{}", value),
            DurationConstraint::Exact { value } => write!(f, "{}", value),
        }
    }
}

/// Kind of a classified token, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Term,
    Not,
    ExactPhrase,
    FieldSearch,
    DateFilter,
    DurationFilter,
    Operator,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Term => "TERM",
            TokenKind::Not => "NOT",
            TokenKind::ExactPhrase => "EXACT_PHRASE",
            TokenKind::FieldSearch => "FIELD_SEARCH",
            TokenKind::DateFilter => "DATE_FILTER",
            TokenKind::DurationFilter => "DURATION_FILTER",
            TokenKind::Operator => "OPERATOR",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A classified query token
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Token {
    /// Plain search word
    Term { value: String },
    /// Excluded word (`-word`), leading dash stripped
    Not { value: String },
    /// Quoted phrase, quotes stripped
    ExactPhrase { value: String },
    /// Field-scoped search (`title:intro`)
    FieldSearch { field: String, value: String },
    /// Date bound (`after:2024-01-01`); the date is kept as typed
    DateFilter { field: DateField, value: String },
    /// Duration constraint (`duration:10-20`)
    DurationFilter { value: DurationConstraint },
    /// Boolean operator (`|`)
    Operator { value: BoolOperator },
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Term { .. } => TokenKind::Term,
            Token::Not { .. } => TokenKind::Not,
            Token::ExactPhrase { .. } => TokenKind::ExactPhrase,
            Token::FieldSearch { .. } => TokenKind::FieldSearch,
            Token::DateFilter { .. } => TokenKind::DateFilter,
            Token::DurationFilter { .. } => TokenKind::DurationFilter,
            Token::Operator { .. } => TokenKind::Operator,
        }
    }

    /// Filters restrict the result set instead of matching text
    pub fn is_filter(&self) -> bool {
        matches!(self, Token::DateFilter { .. } | Token::DurationFilter { .. })
    }

    pub fn term(value: impl Into<String>) -> Self {
        Token::Term { value: value.into() }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Term { value } => write!(f, "{}", value),
            Token::Not { value } => write!(f, "-{}", value),
            Token::ExactPhrase { value } => write!(f, "\"{}\"", value),
            Token::FieldSearch { field, value } => write!(f, "{}:{}", field, value),
            Token::DateFilter { field, value } => write!(f, "{}:{}", field.as_str(), value),
            Token::DurationFilter { value } => write!(f, "duration:{}", value),
            Token::Operator { value } => write!(f, "{}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_field_exact_match() {
        assert_eq!(DateField::from_field("after"), Some(DateField::After));
        assert_eq!(DateField::from_field("before"), Some(DateField::Before));
        assert_eq!(DateField::from_field("After"), None);
        assert_eq!(DateField::from_field("since"), None);
    }

    #[test]
    fn test_token_kind() {
        assert_eq!(Token::term("foo").kind(), TokenKind::Term);
        let op = Token::Operator { value: BoolOperator::Or };
        assert_eq!(op.kind(), TokenKind::Operator);
        assert!(!op.is_filter());
    }

    #[test]
    fn test_is_filter() {
        let date = Token::DateFilter {
            field: DateField::After,
            value: "2024-01-01".to_string(),
        };
        let duration = Token::DurationFilter {
            value: DurationConstraint::Exact { value: 15.0 },
        };
        assert!(date.is_filter());
        assert!(duration.is_filter());
        assert!(!Token::term("foo").is_filter());
    }

    #[test]
    fn test_range_contains_inclusive() {
        let range = DurationConstraint::Range { min: 10.0, max: 20.0 };
        assert!(range.contains(10.0));
        assert!(range.contains(20.0));
        assert!(!range.contains(21.0));
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let range = DurationConstraint::Range { min: 20.0, max: 10.0 };
        assert!(!range.contains(15.0));
    }

    #[test]
    fn test_comparisons_contains() {
        assert!(DurationConstraint::GreaterThan { value: 15.0 }.contains(16.0));
        assert!(!DurationConstraint::GreaterThan { value: 15.0 }.contains(15.0));
        assert!(DurationConstraint::LessThan { value: 15.0 }.contains(14.5));
        assert!(DurationConstraint::Exact { value: 15.0 }.contains(15.0));
    }

    #[test]
    fn test_nan_constraint() {
        let c = DurationConstraint::Exact { value: f64::NAN };
        assert!(c.has_nan());
        assert!(!c.contains(0.0));

        let r = DurationConstraint::Range { min: 1.0, max: f64::NAN };
        assert!(r.has_nan());
        assert!(!DurationConstraint::LessThan { value: 3.0 }.has_nan());
    }

    #[test]
    fn test_nan_bounds_compare_equal() {
        let a = DurationConstraint::Exact { value: f64::NAN };
        assert_eq!(a, DurationConstraint::Exact { value: f64::NAN });
        assert_ne!(a, DurationConstraint::Exact { value: 1.0 });
        assert_ne!(a, DurationConstraint::GreaterThan { value: f64::NAN });

        let r = DurationConstraint::Range { min: f64::NAN, max: 5.0 };
        assert_eq!(r, DurationConstraint::Range { min: f64::NAN, max: 5.0 });
        assert_ne!(r, DurationConstraint::Range { min: f64::NAN, max: 6.0 });
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::Not { value: "foo".into() }.to_string(), "-foo");
        assert_eq!(
            Token::DurationFilter {
                value: DurationConstraint::Range { min: 10.0, max: 20.0 }
            }
            .to_string(),
            "duration:10-20"
        );
        assert_eq!(BoolOperator::Or.to_string(), "OR");
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_string(&Token::FieldSearch {
            field: "title".into(),
            value: "intro".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"FIELD_SEARCH","field":"title","value":"intro"}"#);

        let json = serde_json::to_string(&Token::DurationFilter {
            value: DurationConstraint::GreaterThan { value: 15.0 },
        })
        .unwrap();
        assert_eq!(
            json,
            r#"{"type":"DURATION_FILTER","value":{"type":"GREATER_THAN","value":15.0}}"#
        );
    }

    #[test]
    fn test_serialize_nan_as_null() {
        let json = serde_json::to_string(&DurationConstraint::Exact { value: f64::NAN }).unwrap();
        assert_eq!(json, r#"{"type":"EXACT","value":null}"#);
    }
}
