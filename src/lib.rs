//! # quizq - quiz catalog search query parser
//!
//! Turns a free-text search string into a structured query of terms,
//! filters and operators.
//!
//! ## Architecture
//!
//! - [`query`] - Tokenizer, token classifier and query builder
//! - [`output`] - Tree and JSON rendering of parsed queries
//! - [`config`] - User configuration for the command line tool
//!
//! ## Query syntax
//!
//! | Input              | Token            |
//! |--------------------|------------------|
//! | `word`             | TERM             |
//! | `-word`            | NOT              |
//! | `"some phrase"`    | EXACT_PHRASE     |
//! | `field:value`      | FIELD_SEARCH     |
//! | `after:2024-01-01` | DATE_FILTER      |
//! | `before:2024-06-30`| DATE_FILTER      |
//! | `duration:10-20`   | DURATION_FILTER  |
//! | `duration:>15`     | DURATION_FILTER  |
//! | `\|`               | OPERATOR (OR)    |
//!
//! ## Quick Start
//!
//! ```
//! use quizq::query::{parse, Token, DurationConstraint};
//!
//! let query = parse("algebra -draft duration:<30").unwrap();
//! assert_eq!(query.terms.len(), 2);
//! assert_eq!(
//!     query.filters[0],
//!     Token::DurationFilter { value: DurationConstraint::LessThan { value: 30.0 } }
//! );
//!
//! assert!(parse("").is_none());
//! ```

pub mod config;
pub mod output;
pub mod query;
