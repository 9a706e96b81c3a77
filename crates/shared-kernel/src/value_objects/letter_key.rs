use std::{borrow::Borrow, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

use crate::error::DomainError;

/// Key of a letter statistic: one letter (case preserved) or two identical
/// uppercase letters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LetterKey(String);

impl LetterKey {
    /// Key for a single letter, kept verbatim.
    pub fn single(letter: char) -> Self {
        Self(letter.to_string())
    }

    /// Key for a doubled letter, folded to uppercase.
    pub fn pair(letter: char) -> Self {
        let upper = fold_upper(letter);
        Self([upper, upper].iter().collect())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn chars(&self) -> std::str::Chars<'_> {
        self.0.chars()
    }

}

/// Unicode letter test: general category `L*` (`Lu`, `Ll`, `Lt`, `Lm`, `Lo`).
///
/// Letter numbers (`Ⅻ`), circled letters (`Ⓐ`) and combining vowel signs are
/// alphabetic but not letters.
#[inline]
pub fn is_letter(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Letter
}

/// Uppercase mapping restricted to one-to-one conversions.
///
/// Letters whose uppercase form expands to several characters (`ß` -> `SS`)
/// are returned unchanged so a pair key always stays two characters long.
pub fn fold_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

impl TryFrom<String> for LetterKey {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(_), None, None) => Ok(Self(value)),
            (Some(a), Some(b), None) if a == b => Ok(Self(value)),
            (Some(_), Some(_), None) => Err(DomainError::InvalidKey {
                key: value,
                reason: "pair keys must repeat the same letter".into(),
            }),
            _ => Err(DomainError::InvalidKey {
                key: value,
                reason: "keys hold one or two characters".into(),
            }),
        }
    }
}

impl FromStr for LetterKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

impl From<LetterKey> for String {
    fn from(key: LetterKey) -> Self {
        key.0
    }
}

impl Borrow<str> for LetterKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LetterKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LetterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
