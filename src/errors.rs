use crate::matcher::MatcherConfigError;
use crate::pattern::PatternSyntaxError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error(transparent)]
    Syntax(#[from] PatternSyntaxError),
    #[error(transparent)]
    Config(#[from] MatcherConfigError),
}

pub type MatchResult<T> = Result<T, MatchError>;
