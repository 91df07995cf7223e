//! Digits following a decimal-point marker
//!
//! After "נקודה" a phrase is read either as a sequence of single digits
//! ("נקודה אפס שבע" is .07) or, when it contains tens, hundreds or a thousand,
//! as one number whose digits become the fraction ("נקודה שבע מאות ושבע" is .707).

use crate::lexicon::Lexicon;
use crate::parser::tokens::{is_digit_string, is_lone_conjunction};
use crate::types::Token;

/// Collect the words that belong to the decimal phrase at the start of `tokens`
///
/// The window ends at a lone conjunction, at a million/billion word, or at the first
/// word that cannot appear after a decimal point. Every returned word was consumed, so
/// the window length is also the number of tokens to skip.
pub fn decimal_window<'t>(tokens: &'t [Token], lexicon: &Lexicon) -> Vec<&'t str> {
    let mut window = Vec::new();
    let mut j = 0;

    while let Some(token) = tokens.get(j) {
        let word = token.as_str();
        if is_lone_conjunction(token) || lexicon.is_large_scale(word) {
            break;
        }

        if let Some(next) = tokens.get(j + 1) {
            if lexicon.hundred_pair(word, next.as_str()).is_some() {
                window.push(word);
                window.push(next.as_str());
                j += 2;
                continue;
            }
        }

        let accepted = is_digit_string(word)
            || lexicon.unit(word).is_some()
            || lexicon.ten(word).is_some()
            || lexicon.hundred(word).is_some()
            || lexicon.is_thousand(word);
        if !accepted {
            break;
        }

        window.push(word);
        j += 1;
    }

    window
}

/// Turn a decimal window into the digit string placed after "0."
///
/// Returns `None` when a magnitude phrase does not fit in a `u64`; the whole window
/// is still part of the decimal phrase, so it cannot be read partially.
pub fn fraction_digits(window: &[&str], lexicon: &Lexicon) -> Option<String> {
    if has_magnitude(window, lexicon) {
        magnitude_digits(window, lexicon)
    } else {
        Some(digit_sequence(window, lexicon))
    }
}

fn has_magnitude(window: &[&str], lexicon: &Lexicon) -> bool {
    window.iter().enumerate().any(|(i, word)| {
        lexicon.ten(word).is_some()
            || lexicon.hundred(word).is_some()
            || lexicon.is_thousand(word)
            || window
                .get(i + 1)
                .is_some_and(|next| lexicon.hundred_pair(word, next).is_some())
    })
}

/// Each units word contributes one digit, numerals are copied verbatim
fn digit_sequence(window: &[&str], lexicon: &Lexicon) -> String {
    let mut digits = String::new();
    for word in window {
        if is_digit_string(word) {
            digits.push_str(word);
        } else if let Some(unit) = lexicon.unit(word) {
            digits.push_str(&unit.to_string());
        } else {
            break;
        }
    }

    if digits.is_empty() {
        digits.push('0');
    }
    digits
}

/// Read the window as a whole number
fn magnitude_digits(window: &[&str], lexicon: &Lexicon) -> Option<String> {
    let mut value: u64 = 0;
    let mut group: u64 = 0;
    let mut k = 0;

    while let Some(word) = window.get(k).copied() {
        let (next_group, consumed) = if let Some(hundreds) = window
            .get(k + 1)
            .and_then(|next| lexicon.hundred_pair(word, next))
        {
            (group.checked_add(hundreds)?, 2)
        } else if let Some(n) = lexicon
            .hundred(word)
            .or_else(|| lexicon.ten(word))
            .or_else(|| lexicon.unit(word))
        {
            (group.checked_add(n)?, 1)
        } else if is_digit_string(word) {
            // digits continue the group positionally: "שלוש 25" reads as 325
            (append_digits(group, word)?, 1)
        } else if lexicon.is_thousand(word) {
            let thousands = group.max(1);
            value = value
                .checked_mul(1_000)?
                .checked_add(thousands.checked_mul(1_000)?)?;
            (0, 1)
        } else {
            // decimal_window only admits the words handled above
            break;
        };

        group = next_group;
        k += consumed;
    }

    Some(value.checked_add(group)?.to_string())
}

fn append_digits(group: u64, digits: &str) -> Option<u64> {
    let shift = 10u64.checked_pow(u32::try_from(digits.len()).ok()?)?;
    let n: u64 = digits.parse().ok()?;
    group.checked_mul(shift)?.checked_add(n)
}
