//! Type definitions for the Hebrew number converter
//!
//! This module defines the values that flow between the tokenizer and the combiner:
//! normalized tokens and the scale groups closed while a phrase is scanned.

/// A single word extracted from the input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The word with any leading conjunction removed
    pub text: String,
    /// Whether a leading "ו" was stripped from the word
    pub conjunction: bool,
}

impl Token {
    /// Creates a token without a conjunction prefix
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            conjunction: false,
        }
    }

    /// Creates a token that carried a conjunction prefix in the input
    pub fn with_conjunction(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            conjunction: true,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// A segment value closed out by a scale word
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleGroup {
    /// The segment value preceding the scale word
    pub value: f64,
    /// The scale multiplier (1,000 / 1,000,000 / 1,000,000,000)
    pub multiplier: u64,
}

impl ScaleGroup {
    /// The group's contribution to the phrase total
    pub fn total(&self) -> f64 {
        self.value * self.multiplier as f64
    }
}
