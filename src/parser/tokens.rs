use winnow::ascii::digit1;
use winnow::combinator::{opt, preceded, repeat, terminated};
use winnow::token::{take_till, take_while};
use winnow::{ModalResult, Parser};

use crate::error::{ConversionError, Result};
use crate::lexicon::Lexicon;
use crate::types::Token;

/// The "and" conjunction, written as a prefix letter or as a word on its own
pub const CONJUNCTION: char = 'ו';

/// Hebrew maqaf, accepted in place of whitespace between words
pub const CONNECTOR: char = '\u{05BE}';

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == CONNECTOR
}

// Word splitting
pub fn parse_separators<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_while(0.., is_separator).parse_next(input)
}

pub fn parse_word<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_till(1.., is_separator).parse_next(input)
}

pub fn parse_words<'s>(input: &mut &'s str) -> ModalResult<Vec<&'s str>> {
    preceded(
        parse_separators,
        repeat(0.., terminated(parse_word, parse_separators)),
    )
    .parse_next(input)
}

// Numeral literals
pub fn parse_digits<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    digit1.parse_next(input)
}

/// Parse a numeral such as `67` or `3.1415`
pub fn parse_numeral_literal<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    (digit1, opt(('.', digit1))).take().parse_next(input)
}

/// Whether the whole word is a run of ASCII digits
pub fn is_digit_string(word: &str) -> bool {
    parse_digits.parse(word).is_ok()
}

/// Whether the whole word is a numeral with an optional decimal part
pub fn is_numeral(word: &str) -> bool {
    parse_numeral_literal.parse(word).is_ok()
}

/// Whether the token is the conjunction standing alone
pub fn is_lone_conjunction(token: &Token) -> bool {
    let mut chars = token.text.chars();
    chars.next() == Some(CONJUNCTION) && chars.next().is_none()
}

/// Split a word into its text and whether a conjunction prefix was removed
fn strip_conjunction(word: &str) -> (&str, bool) {
    match word.strip_prefix(CONJUNCTION) {
        Some(rest) if !rest.is_empty() => (rest, true),
        _ => (word, false),
    }
}

/// Split and normalize input text into tokens
///
/// The connector is treated as whitespace, a leading "ו" is stripped from every word
/// longer than one letter, and composite words such as "אלפיים" are replaced by the
/// tokens they stand for.
///
/// # Examples
/// ```
/// use hebrew_number::tokenize;
///
/// let tokens = tokenize("עשרים־ושלושה אלפיים").unwrap();
/// let words: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
/// assert_eq!(words, ["עשרים", "שלושה", "שניים", "אלפים"]);
/// assert!(tokens[1].conjunction);
/// ```
pub fn tokenize(text: &str) -> Result<Vec<Token>> {
    let lexicon = Lexicon::get()?;
    let words = parse_words
        .parse(text)
        .map_err(|e| ConversionError::Tokenize(e.to_string()))?;

    let mut tokens = Vec::with_capacity(words.len());
    for word in words {
        let (word, conjunction) = strip_conjunction(word);
        match lexicon.alias(word) {
            Some(expansion) => tokens.extend(expansion.iter().map(Token::new)),
            None if conjunction => tokens.push(Token::with_conjunction(word)),
            None => tokens.push(Token::new(word)),
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(Token::as_str).collect()
    }

    #[test]
    fn test_split_on_whitespace_and_connector() {
        let tokens = tokenize("  עשרים־שלושה\tאלף  ארבע מאות ").unwrap();
        assert_eq!(words(&tokens), ["עשרים", "שלושה", "אלף", "ארבע", "מאות"]);
        assert!(tokens.iter().all(|t| !t.conjunction));
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("   ־ ").unwrap().is_empty());
    }

    #[test]
    fn test_conjunction_prefix_is_stripped() {
        let tokens = tokenize("חמישים ושבע").unwrap();
        assert_eq!(
            tokens,
            vec![Token::new("חמישים"), Token::with_conjunction("שבע")]
        );
    }

    #[test]
    fn test_lone_conjunction_is_kept() {
        let tokens = tokenize("מיליון ו חצי").unwrap();
        assert_eq!(words(&tokens), ["מיליון", "ו", "חצי"]);
        assert!(!tokens[1].conjunction);
        assert!(is_lone_conjunction(&tokens[1]));
        assert!(!is_lone_conjunction(&tokens[2]));
    }

    #[test]
    fn test_alias_expansion() {
        let tokens = tokenize("ואלפיים").unwrap();
        assert_eq!(tokens, vec![Token::new("שניים"), Token::new("אלפים")]);
    }

    #[test]
    fn test_numeral_recognition() {
        assert!(is_numeral("67"));
        assert!(is_numeral("3.1415"));
        assert!(!is_numeral("3."));
        assert!(!is_numeral(".5"));
        assert!(!is_numeral("1.2.3"));
        assert!(!is_numeral("שבע."));

        assert!(is_digit_string("25"));
        assert!(!is_digit_string("2.5"));
        assert!(!is_digit_string(""));
    }
}
