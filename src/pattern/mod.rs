mod class;
mod error;
mod token;
mod validate;

pub use class::{CharClass, ClassItem, ClassMatch, match_class, parse_class};
pub use error::{ClassError, PatternResult, PatternSyntaxError, SyntaxErrorKind};
pub use token::{Quantifier, Token, is_plain_literal, quantifier_at, read_token};
pub use validate::validate_pattern;
