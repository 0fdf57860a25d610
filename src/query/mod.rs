pub mod builder;
pub mod classifier;
pub mod parser;
pub mod token;
pub mod tokenizer;

pub use builder::{ParsedQuery, QueryBuilder, build};
pub use classifier::{classify, parse_duration_filter, parse_number};
pub use parser::{parse, parse_opt};
pub use token::{BoolOperator, DateField, DurationConstraint, Token, TokenKind};
pub use tokenizer::{RawToken, tokenize};
