//! Left-to-right combination of normalized tokens into a number
//!
//! At every position the rules below are tried in order and the first one that
//! matches consumes tokens. The order is part of the grammar: a numeral with an
//! attached half must be seen before the plain hundreds rules, and a two-word
//! hundreds phrase before its first word is read as a units word.

use crate::error::{ConversionError, Result};
use crate::lexicon::Lexicon;
use crate::parser::decimal::{decimal_window, fraction_digits};
use crate::parser::tokens::{is_lone_conjunction, is_numeral};
use crate::types::{ScaleGroup, Token};

/// A rule reports whether it matched; a matching rule has advanced the cursor
type Rule<'a> = fn(&mut Combiner<'a>) -> Result<bool>;

/// Parse state for one phrase
#[derive(Debug)]
pub struct Combiner<'a> {
    tokens: &'a [Token],
    lexicon: &'a Lexicon,
    pos: usize,
    /// Value below the active scale word
    segment: f64,
    tens_seen: bool,
    units_seen: bool,
    decimal_used: bool,
    /// Half/quarter may be added once per phrase
    fraction_used: bool,
    last_scale: Option<u64>,
    groups: Vec<ScaleGroup>,
}

impl<'a> Combiner<'a> {
    pub fn new(tokens: &'a [Token], lexicon: &'a Lexicon) -> Self {
        Self {
            tokens,
            lexicon,
            pos: 0,
            segment: 0.0,
            tens_seen: false,
            units_seen: false,
            decimal_used: false,
            fraction_used: false,
            last_scale: None,
            groups: Vec::new(),
        }
    }

    fn rules() -> [(&'static str, Rule<'a>); 9] {
        [
            ("decimal point", Self::decimal_point),
            ("conjunction fraction", Self::conjunction_fraction),
            ("fraction", Self::bare_fraction),
            ("numeral", Self::numeral),
            ("two-word hundreds", Self::hundreds_pair),
            ("hundreds", Self::hundreds),
            ("tens", Self::tens),
            ("units", Self::units),
            ("scale", Self::scale),
        ]
    }

    /// Scan every token and return the phrase value
    pub fn run(mut self) -> Result<f64> {
        'scan: while self.pos < self.tokens.len() {
            let start = self.pos;
            for (name, rule) in Self::rules() {
                if rule(&mut self)? {
                    log::trace!(
                        "rule '{name}' consumed tokens {start}..{} (segment = {})",
                        self.pos,
                        self.segment
                    );
                    continue 'scan;
                }
            }
            return Err(ConversionError::UnrecognizedWord(
                self.current().to_string(),
            ));
        }

        Ok(self.total())
    }

    /// Sum of all closed scale groups plus the trailing segment
    fn total(&self) -> f64 {
        self.groups.iter().map(ScaleGroup::total).sum::<f64>() + self.segment
    }

    fn current(&self) -> &'a str {
        self.tokens[self.pos].as_str()
    }

    fn token(&self, offset: usize) -> Option<&'a Token> {
        self.tokens.get(self.pos + offset)
    }

    fn word(&self, offset: usize) -> Option<&'a str> {
        self.token(offset).map(Token::as_str)
    }

    /// A lone "ו" at `offset` followed by half/quarter; returns the addend and its word
    fn conjunction_fraction_at(&self, offset: usize) -> Option<(f64, &'a str)> {
        if !self.token(offset).is_some_and(is_lone_conjunction) {
            return None;
        }
        let word = self.word(offset + 1)?;
        self.lexicon.fraction(word).map(|value| (value, word))
    }

    fn claim_fraction(&mut self, word: &str) -> Result<()> {
        if self.fraction_used {
            return Err(ConversionError::MultipleFractions(word.to_string()));
        }
        self.fraction_used = true;
        Ok(())
    }

    fn decimal_point(&mut self) -> Result<bool> {
        if !self.lexicon.is_decimal_point(self.current()) {
            return Ok(false);
        }
        if self.decimal_used {
            return Err(ConversionError::MultipleDecimalPoints);
        }

        let window = decimal_window(&self.tokens[self.pos + 1..], self.lexicon);
        if window.is_empty() {
            return Err(ConversionError::EmptyDecimalPhrase);
        }

        let invalid = || ConversionError::InvalidDecimalPhrase(window.join(" "));
        let digits = fraction_digits(&window, self.lexicon).ok_or_else(invalid)?;
        let fraction: f64 = format!("0.{digits}").parse().map_err(|_| invalid())?;

        self.segment += fraction;
        self.decimal_used = true;
        self.pos += 1 + window.len();
        Ok(true)
    }

    fn conjunction_fraction(&mut self) -> Result<bool> {
        let Some((value, word)) = self.conjunction_fraction_at(0) else {
            return Ok(false);
        };
        self.claim_fraction(word)?;

        // with an empty segment the half belongs to the group just closed
        if self.segment != 0.0 {
            self.segment += value;
        } else if let Some(last) = self.groups.last_mut() {
            last.value += value;
        } else {
            self.segment += value;
        }

        self.pos += 2;
        Ok(true)
    }

    fn bare_fraction(&mut self) -> Result<bool> {
        let word = self.current();
        let Some(value) = self.lexicon.fraction(word) else {
            return Ok(false);
        };
        self.claim_fraction(word)?;

        self.segment += value;
        self.pos += 1;
        Ok(true)
    }

    fn numeral(&mut self) -> Result<bool> {
        let word = self.current();
        if !is_numeral(word) {
            return Ok(false);
        }
        let number: f64 = word
            .parse()
            .map_err(|_| ConversionError::MalformedLiteral(word.to_string()))?;

        // "5 ורבע", "5 ו רבע"
        let attached = if self.fraction_used {
            None
        } else {
            self.conjunction_fraction_at(1)
                .map(|(value, _)| (value, 3))
                .or_else(|| {
                    self.word(1)
                        .and_then(|next| self.lexicon.fraction(next))
                        .map(|value| (value, 2))
                })
        };
        let (fraction, consumed) = attached.unwrap_or((0.0, 1));
        if attached.is_some() {
            self.fraction_used = true;
        }

        self.segment += number + fraction;
        self.tens_seen = false;
        self.units_seen = false;
        self.pos += consumed;
        Ok(true)
    }

    fn hundreds_pair(&mut self) -> Result<bool> {
        let Some(value) = self
            .word(1)
            .and_then(|second| self.lexicon.hundred_pair(self.current(), second))
        else {
            return Ok(false);
        };

        self.segment += value as f64;
        self.tens_seen = false;
        self.pos += 2;
        Ok(true)
    }

    fn hundreds(&mut self) -> Result<bool> {
        let Some(value) = self.lexicon.hundred(self.current()) else {
            return Ok(false);
        };

        self.segment += value as f64;
        self.tens_seen = false;
        self.pos += 1;
        Ok(true)
    }

    fn tens(&mut self) -> Result<bool> {
        let word = self.current();
        let Some(value) = self.lexicon.ten(word) else {
            return Ok(false);
        };
        if self.tens_seen {
            return Err(ConversionError::RepeatedTens(word.to_string()));
        }

        self.segment += value as f64;
        self.tens_seen = true;
        self.pos += 1;
        Ok(true)
    }

    fn units(&mut self) -> Result<bool> {
        let word = self.current();
        let Some(value) = self.lexicon.unit(word) else {
            return Ok(false);
        };
        if self.units_seen {
            return Err(ConversionError::RepeatedUnits(word.to_string()));
        }

        self.segment += value as f64;
        self.units_seen = true;
        self.pos += 1;
        Ok(true)
    }

    fn scale(&mut self) -> Result<bool> {
        let word = self.current();
        let Some(multiplier) = self.lexicon.scale(word) else {
            return Ok(false);
        };
        if let Some(previous) = self.last_scale.filter(|&previous| previous <= multiplier) {
            return Err(ConversionError::NonDecreasingScale {
                word: word.to_string(),
                multiplier,
                previous,
            });
        }
        self.last_scale = Some(multiplier);

        // a bare scale word means one of it
        let value = if self.segment != 0.0 { self.segment } else { 1.0 };
        self.groups.push(ScaleGroup { value, multiplier });

        // a decimal point only applies to the number before its own scale word
        self.segment = 0.0;
        self.tens_seen = false;
        self.units_seen = false;
        self.decimal_used = false;
        self.pos += 1;

        // "מיליון וחצי", "מיליון ו חצי"
        let trailing = self
            .conjunction_fraction_at(0)
            .map(|(value, word)| (value, word, 2))
            .or_else(|| {
                let token = self.token(0).filter(|t| t.conjunction)?;
                self.lexicon
                    .fraction(token.as_str())
                    .map(|value| (value, token.as_str(), 1))
            });
        if let Some((value, word, consumed)) = trailing {
            self.claim_fraction(word)?;
            self.groups.push(ScaleGroup { value, multiplier });
            self.pos += consumed;
        }

        Ok(true)
    }
}
