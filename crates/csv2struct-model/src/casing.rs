//! Word-casing strategies for header normalization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnsupportedCaseError;

/// How raw CSV headers are tokenized and re-cased into field names.
///
/// Each strategy describes the convention the *source* headers follow, not
/// the convention of the output: all five produce title-cased, concatenated
/// field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStrategy {
    /// Headers already carry the desired casing; invalid characters are
    /// stripped but casing is left untouched.
    Pascal,
    /// Single-word headers whose first character gets upper-cased after
    /// stripping. No word-splitting occurs, despite the name.
    Camel,
    /// Words separated by `-`.
    Kebab,
    /// Words separated by `_`.
    Snake,
    /// Words separated by a space.
    Space,
}

impl CaseStrategy {
    /// Every supported strategy, in display order.
    pub const ALL: [CaseStrategy; 5] = [
        CaseStrategy::Pascal,
        CaseStrategy::Camel,
        CaseStrategy::Kebab,
        CaseStrategy::Snake,
        CaseStrategy::Space,
    ];

    /// Word delimiter for splitting strategies; `None` when the whole header
    /// is treated as one word.
    pub fn delimiter(self) -> Option<char> {
        match self {
            CaseStrategy::Snake => Some('_'),
            CaseStrategy::Kebab => Some('-'),
            CaseStrategy::Space => Some(' '),
            CaseStrategy::Pascal | CaseStrategy::Camel => None,
        }
    }

    /// Canonical lowercase name as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            CaseStrategy::Pascal => "pascal",
            CaseStrategy::Camel => "camel",
            CaseStrategy::Kebab => "kebab",
            CaseStrategy::Snake => "snake",
            CaseStrategy::Space => "space",
        }
    }

    /// Parse a canonical strategy name.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedCaseError`] for any name outside the fixed five.
    pub fn parse(name: &str) -> Result<Self, UnsupportedCaseError> {
        match name {
            "pascal" => Ok(CaseStrategy::Pascal),
            "camel" => Ok(CaseStrategy::Camel),
            "kebab" => Ok(CaseStrategy::Kebab),
            "snake" => Ok(CaseStrategy::Snake),
            "space" => Ok(CaseStrategy::Space),
            other => Err(UnsupportedCaseError(other.to_string())),
        }
    }
}

impl fmt::Display for CaseStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CaseStrategy {
    type Err = UnsupportedCaseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        CaseStrategy::parse(value)
    }
}
