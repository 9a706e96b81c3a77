pub mod letter_count;
pub mod letter_key;

pub use letter_count::LetterCount;
pub use letter_key::{LetterKey, fold_upper, is_letter};
