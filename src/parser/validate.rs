use crate::error::{ConversionError, Result};
use crate::lexicon::Lexicon;
use crate::parser::tokens::{is_lone_conjunction, is_numeral};
use crate::types::Token;

/// Whole-phrase checks that run before the combiner scans the tokens
///
/// Rejects periods outside numerals, two tens words in a row (a lone "ו" between
/// them does not help), and a tens word directly before "two thousand".
pub fn validate_tokens(tokens: &[Token], lexicon: &Lexicon) -> Result<()> {
    if let Some(token) = tokens
        .iter()
        .find(|t| t.text.contains('.') && !is_numeral(&t.text))
    {
        return Err(ConversionError::MalformedLiteral(token.text.clone()));
    }

    for (idx, token) in tokens.iter().enumerate() {
        if lexicon.ten(token.as_str()).is_none() {
            continue;
        }

        let mut next = idx + 1;
        if tokens.get(next).is_some_and(is_lone_conjunction) {
            next += 1;
        }
        if let Some(repeated) = tokens.get(next).filter(|t| lexicon.ten(t.as_str()).is_some()) {
            return Err(ConversionError::RepeatedTens(repeated.text.clone()));
        }

        if precedes_two_thousand(&tokens[idx + 1..], lexicon) {
            return Err(ConversionError::TensBeforeTwoThousand(token.text.clone()));
        }
    }

    Ok(())
}

fn precedes_two_thousand(rest: &[Token], lexicon: &Lexicon) -> bool {
    match rest {
        [first, ..] if lexicon.is_alias(first.as_str()) => true,
        [first, second, ..] => lexicon.spells_two_thousand(first.as_str(), second.as_str()),
        _ => false,
    }
}
