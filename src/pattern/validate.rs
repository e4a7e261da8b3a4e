use memchr::memchr_iter;

use super::class::{CLASS_CLOSE, CLASS_NEGATE, CLASS_OPEN};
use super::token::Quantifier;
use super::{PatternResult, PatternSyntaxError};

#[tracing::instrument(level = "trace", fields(pattern=%pattern))]
pub fn validate_pattern(pattern: &str) -> PatternResult<()> {
    let result = check_pattern(pattern);

    if let Err(err) = &result {
        tracing::event!(
            tracing::Level::DEBUG,
            kind = ?err.kind(),
            pattern = %pattern,
            "pattern rejected"
        );
    }

    result
}

fn check_pattern(pattern: &str) -> PatternResult<()> {
    let chars: Vec<char> = pattern.chars().collect();

    if let Some(&first) = chars.first()
        && Quantifier::from_char(first).is_some()
    {
        return Err(PatternSyntaxError::LeadingQuantifier {
            pattern: pattern.to_string(),
            quantifier: first,
        });
    }

    for (index, pair) in chars.windows(2).enumerate() {
        if pair[0] == pair[1] && Quantifier::from_char(pair[0]).is_some() {
            return Err(PatternSyntaxError::DoubledQuantifier {
                pattern: pattern.to_string(),
                quantifier: pair[0],
                index,
            });
        }
    }

    // Brackets are ASCII, so byte counts equal char counts.
    let bytes = pattern.as_bytes();
    let opened = memchr_iter(CLASS_OPEN as u8, bytes).count();
    let closed = memchr_iter(CLASS_CLOSE as u8, bytes).count();

    if opened != closed {
        return Err(PatternSyntaxError::UnbalancedBrackets {
            pattern: pattern.to_string(),
            opened,
            closed,
        });
    }

    let mut idx = 0usize;
    while idx < chars.len() {
        if chars[idx] != CLASS_OPEN {
            idx += 1;
            continue;
        }

        let mut body = idx + 1;
        if chars.get(body) == Some(&CLASS_NEGATE) {
            body += 1;
        }

        match chars
            .get(body..)
            .and_then(|rest| rest.iter().position(|&c| c == CLASS_CLOSE))
        {
            Some(offset) => idx = body + offset + 1,
            None => {
                return Err(PatternSyntaxError::UnterminatedClass {
                    pattern: pattern.to_string(),
                    index: idx,
                });
            }
        }
    }

    Ok(())
}
