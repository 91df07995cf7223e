//! Hebrew number lexicon
//!
//! This module loads the word tables (units, tens, hundreds, scales, fractions and
//! composite aliases) from the TOML data embedded in the crate and exposes them
//! as a process-wide, read-only singleton.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Error type for lexicon loading
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexiconError {
    /// The TOML document could not be parsed
    #[error("Error parsing lexicon data: {0}")]
    ParseError(String),
    /// A required table or key is absent
    #[error("Lexicon is missing '{0}'")]
    Missing(String),
    /// A table entry has a value of the wrong shape
    #[error("Invalid lexicon entry '{word}' in [{table}]")]
    InvalidEntry { table: String, word: String },
}

type Result<T> = std::result::Result<T, LexiconError>;

const EMBEDDED_LEXICON: &str = include_str!("lexicon/lexicon.toml");

// Global singleton; the load result is kept so every caller sees the same failure
static LEXICON: OnceLock<Result<Lexicon>> = OnceLock::new();

/// Word tables used by the tokenizer and the combiner
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    units: HashMap<String, u64>,
    tens: HashMap<String, u64>,
    hundreds: HashMap<String, u64>,
    scales: HashMap<String, u64>,
    fractions: HashMap<String, f64>,
    aliases: HashMap<String, Vec<String>>,
    two_thousand_units: Vec<String>,
    decimal_point: String,
}

impl Lexicon {
    /// Get the global lexicon, loading the embedded data on first use
    pub fn get() -> Result<&'static Self> {
        LEXICON
            .get_or_init(|| {
                let loaded = Self::from_toml_str(EMBEDDED_LEXICON);
                if let Err(e) = &loaded {
                    log::error!("Failed to load embedded lexicon: {e}");
                }
                loaded
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Parse a lexicon from TOML text
    pub(crate) fn from_toml_str(toml_str: &str) -> Result<Self> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| LexiconError::ParseError(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| LexiconError::ParseError("Root is not a table".to_string()))?;

        let decimal_point = table
            .get("decimal_point")
            .and_then(|v| v.as_str())
            .ok_or_else(|| LexiconError::Missing("decimal_point".to_string()))?
            .to_string();

        let fractions: HashMap<String, f64> = section(table, "fractions")?
            .iter()
            .map(|(word, value)| {
                value
                    .as_float()
                    .filter(|f| *f > 0.0 && *f < 1.0)
                    .map(|f| (word.clone(), f))
                    .ok_or_else(|| invalid("fractions", word))
            })
            .collect::<Result<_>>()?;

        let mut aliases = HashMap::new();
        for (word, value) in section(table, "aliases")? {
            let expansion: Vec<String> = value
                .as_array()
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|item| item.as_str().map(str::to_string))
                        .collect()
                })
                .unwrap_or_default();
            if expansion.is_empty() {
                return Err(invalid("aliases", word));
            }
            aliases.insert(word.clone(), expansion);
        }

        let lexicon = Self {
            units: magnitudes(table, "units")?,
            tens: magnitudes(table, "tens")?,
            hundreds: magnitudes(table, "hundreds")?,
            scales: magnitudes(table, "scales")?,
            fractions,
            aliases,
            two_thousand_units: word_list(table, "two_thousand_units")?,
            decimal_point,
        };

        log::debug!(
            "Loaded lexicon: {} units, {} tens, {} hundreds, {} scales",
            lexicon.units.len(),
            lexicon.tens.len(),
            lexicon.hundreds.len(),
            lexicon.scales.len()
        );

        Ok(lexicon)
    }

    pub fn unit(&self, word: &str) -> Option<u64> {
        self.units.get(word).copied()
    }

    pub fn ten(&self, word: &str) -> Option<u64> {
        self.tens.get(word).copied()
    }

    /// Look up a single-word hundreds entry
    pub fn hundred(&self, word: &str) -> Option<u64> {
        self.hundreds.get(word).copied()
    }

    /// Look up a two-word hundreds entry such as "שלוש מאות"
    pub fn hundred_pair(&self, first: &str, second: &str) -> Option<u64> {
        self.hundreds.get(&format!("{first} {second}")).copied()
    }

    pub fn scale(&self, word: &str) -> Option<u64> {
        self.scales.get(word).copied()
    }

    /// Whether the word is a spelling of one thousand
    pub fn is_thousand(&self, word: &str) -> bool {
        self.scale(word) == Some(1_000)
    }

    /// Whether the word is a scale larger than a thousand (million, billion)
    pub fn is_large_scale(&self, word: &str) -> bool {
        self.scale(word).is_some_and(|m| m > 1_000)
    }

    /// The addend for "half" or "quarter"
    pub fn fraction(&self, word: &str) -> Option<f64> {
        self.fractions.get(word).copied()
    }

    /// The canonical tokens a composite word expands to
    pub fn alias(&self, word: &str) -> Option<&[String]> {
        self.aliases.get(word).map(Vec::as_slice)
    }

    pub fn is_alias(&self, word: &str) -> bool {
        self.aliases.contains_key(word)
    }

    /// Whether two words spell out "אלפיים", e.g. "שתיים אלפים"
    ///
    /// Only the spellings listed in `two_thousand_units` count; "שתי אלפים" does not.
    pub fn spells_two_thousand(&self, first: &str, second: &str) -> bool {
        self.two_thousand_units.iter().any(|unit| unit == first)
            && self
                .aliases
                .values()
                .any(|expansion| matches!(expansion.as_slice(), [_, scale] if scale == second))
    }

    pub fn is_decimal_point(&self, word: &str) -> bool {
        self.decimal_point == word
    }
}

fn section<'t>(table: &'t toml::Table, name: &str) -> Result<&'t toml::Table> {
    table
        .get(name)
        .and_then(|v| v.as_table())
        .ok_or_else(|| LexiconError::Missing(name.to_string()))
}

fn invalid(table: &str, word: &str) -> LexiconError {
    LexiconError::InvalidEntry {
        table: table.to_string(),
        word: word.to_string(),
    }
}

/// Read a top-level array of words
fn word_list(table: &toml::Table, name: &str) -> Result<Vec<String>> {
    table
        .get(name)
        .and_then(|v| v.as_array())
        .ok_or_else(|| LexiconError::Missing(name.to_string()))?
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| invalid(name, &item.to_string()))
        })
        .collect()
}

/// Read a table of word → non-negative integer entries
fn magnitudes(table: &toml::Table, name: &str) -> Result<HashMap<String, u64>> {
    section(table, name)?
        .iter()
        .map(|(word, value)| {
            value
                .as_integer()
                .and_then(|n| u64::try_from(n).ok())
                .map(|n| (word.clone(), n))
                .ok_or_else(|| invalid(name, word))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_lexicon_loading() {
        let lexicon = Lexicon::get().expect("embedded lexicon should load");

        assert_eq!(lexicon.unit("אפס"), Some(0));
        assert_eq!(lexicon.unit("שתיים"), Some(2));
        assert_eq!(lexicon.unit("שתי"), Some(2));
        assert_eq!(lexicon.ten("עשרה"), Some(10));
        assert_eq!(lexicon.ten("שלשים"), Some(30));
        assert_eq!(lexicon.hundred("מאתים"), Some(200));
        assert_eq!(lexicon.hundred_pair("שלושה", "מאות"), Some(300));
        assert_eq!(lexicon.hundred_pair("תשע", "מאות"), Some(900));
        assert_eq!(lexicon.scale("מליארד"), Some(1_000_000_000));
        assert_eq!(lexicon.fraction("רבע"), Some(0.25));
        assert!(lexicon.is_decimal_point("נקודה"));
    }

    #[test]
    fn test_scale_classification() {
        let lexicon = Lexicon::get().unwrap();

        assert!(lexicon.is_thousand("אלף"));
        assert!(lexicon.is_thousand("אלפים"));
        assert!(!lexicon.is_thousand("מיליון"));
        assert!(lexicon.is_large_scale("מליון"));
        assert!(lexicon.is_large_scale("מיליארד"));
        assert!(!lexicon.is_large_scale("אלף"));
        assert!(!lexicon.is_large_scale("מאה"));
    }

    #[test]
    fn test_alias_expansion_table() {
        let lexicon = Lexicon::get().unwrap();

        let expansion = lexicon.alias("אלפיים").expect("two-thousand alias");
        assert_eq!(expansion, ["שניים", "אלפים"]);
        assert!(lexicon.alias("אלף").is_none());
    }

    #[test]
    fn test_spelled_out_two_thousand() {
        let lexicon = Lexicon::get().unwrap();

        assert!(lexicon.spells_two_thousand("שניים", "אלפים"));
        assert!(lexicon.spells_two_thousand("שתיים", "אלפים"));
        assert!(lexicon.spells_two_thousand("שני", "אלפים"));
        assert!(!lexicon.spells_two_thousand("שתי", "אלפים"));
        assert!(!lexicon.spells_two_thousand("שניים", "אלף"));
        assert!(!lexicon.spells_two_thousand("שלוש", "אלפים"));
    }

    #[test]
    fn test_exact_matching_only() {
        let lexicon = Lexicon::get().unwrap();

        assert_eq!(lexicon.unit("שלוש "), None);
        assert_eq!(lexicon.hundred("שלוש מאות"), Some(300));
        assert_eq!(lexicon.hundred_pair("שלוש", "מאה"), None);
    }

    #[test]
    fn test_missing_table_is_reported() {
        let err = Lexicon::from_toml_str("decimal_point = \"נקודה\"\n[units]\n\"אפס\" = 0\n")
            .unwrap_err();
        assert_eq!(err, LexiconError::Missing("fractions".to_string()));
    }

    #[test]
    fn test_invalid_entry_is_reported() {
        let data = r#"
decimal_point = "נקודה"
[units]
"אפס" = "zero"
[tens]
[hundreds]
[scales]
[fractions]
[aliases]
"#;
        let err = Lexicon::from_toml_str(data).unwrap_err();
        assert_eq!(
            err,
            LexiconError::InvalidEntry {
                table: "units".to_string(),
                word: "אפס".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_toml_is_reported() {
        let err = Lexicon::from_toml_str("[units").unwrap_err();
        assert!(matches!(err, LexiconError::ParseError(_)));
    }
}
