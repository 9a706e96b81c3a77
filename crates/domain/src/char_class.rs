use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

const VOWELS: &str = "аеёиоуыэюяАЕЁИОУЫЭЮЯaeiouyAEIOUY";
const CONSONANTS: &str = "бвгджзйклмнпрстфхцчшщБВГДЖЗЙКЛМНПРСТФХЦЧШЩbcdfghjklmnpqrstvwxyzBCDFGHJKLMNPQRSTVWXYZ";

/// Letter class used to prune statistics tables.
///
/// Membership is a fixed Latin/Cyrillic table: `y`/`Y` count as both vowel
/// and consonant, `ъ`/`ь` and letters of other scripts as neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    Vowel,
    Consonant,
}

impl CharClass {
    pub fn contains(self, c: char) -> bool {
        match self {
            Self::Vowel => VOWELS.contains(c),
            Self::Consonant => CONSONANTS.contains(c),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Vowel => "vowel",
            Self::Consonant => "consonant",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vowel" | "vowels" => Ok(Self::Vowel),
            "consonant" | "consonants" => Ok(Self::Consonant),
            other => Err(format!("Unknown character class: {other}")),
        }
    }
}
