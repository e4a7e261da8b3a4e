use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    LeadingQuantifier,
    DoubledQuantifier,
    UnbalancedBrackets,
    UnterminatedClass,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PatternSyntaxError {
    #[error("pattern '{pattern}' starts with quantifier '{quantifier}'")]
    LeadingQuantifier { pattern: String, quantifier: char },
    #[error("pattern '{pattern}' repeats quantifier '{quantifier}' at index {index}")]
    DoubledQuantifier {
        pattern: String,
        quantifier: char,
        index: usize,
    },
    #[error("pattern '{pattern}' has {opened} '[' but {closed} ']'")]
    UnbalancedBrackets {
        pattern: String,
        opened: usize,
        closed: usize,
    },
    #[error("character class opened at index {index} in pattern '{pattern}' is never closed")]
    UnterminatedClass { pattern: String, index: usize },
}

impl PatternSyntaxError {
    pub fn kind(&self) -> SyntaxErrorKind {
        match self {
            Self::LeadingQuantifier { .. } => SyntaxErrorKind::LeadingQuantifier,
            Self::DoubledQuantifier { .. } => SyntaxErrorKind::DoubledQuantifier,
            Self::UnbalancedBrackets { .. } => SyntaxErrorKind::UnbalancedBrackets,
            Self::UnterminatedClass { .. } => SyntaxErrorKind::UnterminatedClass,
        }
    }

    pub fn pattern(&self) -> &str {
        match self {
            Self::LeadingQuantifier { pattern, .. }
            | Self::DoubledQuantifier { pattern, .. }
            | Self::UnbalancedBrackets { pattern, .. }
            | Self::UnterminatedClass { pattern, .. } => pattern,
        }
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ClassError {
    #[error("character class starting at index {start} has no closing ']'")]
    MalformedClass { start: usize },
    #[error("index {start} does not start a character class")]
    NotAClass { start: usize },
}

pub type PatternResult<T> = Result<T, PatternSyntaxError>;
