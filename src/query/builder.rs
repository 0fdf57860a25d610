use super::token::{BoolOperator, Token};
use log::trace;
use serde::Serialize;

/// Structured result of parsing a search string
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ParsedQuery {
    /// Text-matching tokens: TERM, NOT, EXACT_PHRASE, FIELD_SEARCH
    pub terms: Vec<Token>,
    /// Restricting tokens: DATE_FILTER, DURATION_FILTER
    pub filters: Vec<Token>,
    /// Operators in the order they were written
    pub operators: Vec<BoolOperator>,
}

impl ParsedQuery {
    /// Check if the query carries no terms, filters or operators
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty() && self.filters.is_empty() && self.operators.is_empty()
    }

    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty()
    }

    /// Number of tokens the query was built from
    pub fn token_count(&self) -> usize {
        self.terms.len() + self.filters.len() + self.operators.len()
    }
}

/// Accumulates classified tokens into a [`ParsedQuery`]
#[derive(Debug)]
pub struct QueryBuilder {
    query: ParsedQuery,
    /// Last operator seen. Written on every OPERATOR token but not yet used
    /// to group terms; reserved for OR/AND grouping.
    current_operator: BoolOperator,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self {
            query: ParsedQuery::default(),
            current_operator: BoolOperator::And,
        }
    }

    pub fn current_operator(&self) -> BoolOperator {
        self.current_operator
    }

    /// Route one token into terms, filters or operators
    pub fn push(&mut self, token: Token) {
        trace!("builder: {} {}", token.kind(), token);

        match token {
            Token::Operator { value } => {
                self.current_operator = value;
                self.query.operators.push(value);
            }
            Token::DateFilter { .. } | Token::DurationFilter { .. } => {
                self.query.filters.push(token);
            }
            Token::Not { .. } | Token::ExactPhrase { .. } | Token::FieldSearch { .. } => {
                self.query.terms.push(token);
            }
            Token::Term { value } => {
                self.query.terms.push(Token::Term { value });
            }
        }
    }

    pub fn finish(self) -> ParsedQuery {
        self.query
    }
}

impl Extend<Token> for QueryBuilder {
    fn extend<I: IntoIterator<Item = Token>>(&mut self, iter: I) {
        for token in iter {
            self.push(token);
        }
    }
}

/// Build a query from already classified tokens
pub fn build(tokens: impl IntoIterator<Item = Token>) -> ParsedQuery {
    let mut builder = QueryBuilder::new();
    builder.extend(tokens);
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::token::{DateField, DurationConstraint};

    #[test]
    fn test_empty_build() {
        let q = build(Vec::new());
        assert!(q.is_empty());
        assert_eq!(q.token_count(), 0);
    }

    #[test]
    fn test_routes_tokens() {
        let q = build(vec![
            Token::term("foo"),
            Token::DateFilter {
                field: DateField::After,
                value: "2024-01-01".to_string(),
            },
            Token::Operator {
                value: BoolOperator::Or,
            },
            Token::Not {
                value: "bar".to_string(),
            },
            Token::DurationFilter {
                value: DurationConstraint::Exact { value: 5.0 },
            },
        ]);

        assert_eq!(
            q.terms,
            vec![
                Token::term("foo"),
                Token::Not {
                    value: "bar".to_string()
                }
            ]
        );
        assert_eq!(q.filters.len(), 2);
        assert!(q.filters.iter().all(Token::is_filter));
        assert_eq!(q.operators, vec![BoolOperator::Or]);
        assert!(q.has_filters());
        assert_eq!(q.token_count(), 5);
    }

    #[test]
    fn test_operator_does_not_merge_terms() {
        let q = build(vec![
            Token::term("foo"),
            Token::Operator {
                value: BoolOperator::Or,
            },
            Token::term("bar"),
        ]);
        assert_eq!(q.terms, vec![Token::term("foo"), Token::term("bar")]);
        assert_eq!(q.operators, vec![BoolOperator::Or]);
    }

    #[test]
    fn test_current_operator_tracks_last() {
        let mut builder = QueryBuilder::new();
        assert_eq!(builder.current_operator(), BoolOperator::And);

        builder.push(Token::Operator {
            value: BoolOperator::Or,
        });
        builder.push(Token::term("foo"));
        assert_eq!(builder.current_operator(), BoolOperator::Or);

        let q = builder.finish();
        assert_eq!(q.terms, vec![Token::term("foo")]);
    }

    #[test]
    fn test_order_preserved() {
        let words = ["a", "b", "c", "d"];
        let q = build(words.iter().map(|w| Token::term(*w)));
        let values: Vec<String> = q.terms.iter().map(|t| t.to_string()).collect();
        assert_eq!(values, words);
    }
}
