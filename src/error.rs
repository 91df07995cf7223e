//! Error types for phrase conversion

use crate::lexicon::LexiconError;

/// Result type used throughout the crate
pub type Result<T, E = ConversionError> = std::result::Result<T, E>;

/// Every way a phrase can fail to convert
///
/// The `Display` output of each variant is the human-readable message returned to callers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// A period appeared outside a numeral such as `2.5`
    #[error("Malformed literal '{0}': a period may only appear inside a numeral")]
    MalformedLiteral(String),

    /// Two tens words contribute to the same segment
    #[error("Two tens words in the same segment (at '{0}')")]
    RepeatedTens(String),

    /// Two units words contribute to the same segment
    #[error("More than one units word in the same segment (at '{0}')")]
    RepeatedUnits(String),

    /// A tens word followed by "two thousand", e.g. "חמישים אלפיים"
    #[error("A tens word cannot precede two-thousand (at '{0}')")]
    TensBeforeTwoThousand(String),

    /// A second decimal point inside one segment
    #[error("More than one decimal point in the same segment")]
    MultipleDecimalPoints,

    /// A second half/quarter addend in the phrase
    #[error("A half or quarter may be added only once per phrase (at '{0}')")]
    MultipleFractions(String),

    /// A scale word that is not smaller than the scale before it
    #[error(
        "Scale word '{word}' ({multiplier}) must be smaller than the preceding scale ({previous})"
    )]
    NonDecreasingScale {
        word: String,
        multiplier: u64,
        previous: u64,
    },

    /// A decimal point with no numeric phrase after it
    #[error("A decimal point must be followed by a numeric phrase")]
    EmptyDecimalPhrase,

    /// The phrase after a decimal point is too large to read as a fraction
    #[error("Decimal phrase '{0}' is too large to read")]
    InvalidDecimalPhrase(String),

    /// A word that no grammar rule accepts
    #[error("Unrecognized word: '{0}'")]
    UnrecognizedWord(String),

    /// The input could not be split into words
    #[error("Failed to split input into words: {0}")]
    Tokenize(String),

    /// The embedded lexicon could not be loaded
    #[error(transparent)]
    Lexicon(#[from] LexiconError),
}
