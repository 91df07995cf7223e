use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::parser::combiner::Combiner;
use crate::parser::tokens::tokenize;
use crate::parser::validate::validate_tokens;

/// Convert a Hebrew number phrase into its value
///
/// This is the main public API entry point of this module. The phrase is split into
/// normalized tokens, checked as a whole, then combined left to right.
///
/// # Arguments
/// * `text` - Hebrew number words separated by whitespace or a maqaf
///
/// # Returns
/// * `Result<f64, ConversionError>` - The value, or the grammar rule the phrase breaks
///
/// # Examples
/// ```
/// use hebrew_number::convert;
///
/// assert_eq!(convert("שלוש מאות חמישים ושבע").unwrap(), 357.0);
/// assert_eq!(convert("מיליון וחצי").unwrap(), 1_500_000.0);
/// assert!(convert("אלף אלף").is_err());
/// ```
pub fn convert(text: &str) -> Result<f64> {
    let lexicon = Lexicon::get()?;
    let tokens = tokenize(text)?;
    log::debug!("Converting '{text}' ({} tokens)", tokens.len());

    let result = validate_tokens(&tokens, lexicon)
        .and_then(|()| Combiner::new(&tokens, lexicon).run());

    match &result {
        Ok(value) => log::debug!("'{text}' => {value}"),
        Err(e) => log::debug!("'{text}' rejected: {e}"),
    }
    result
}
