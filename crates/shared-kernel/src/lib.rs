// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    DomainError, ErrorContext, InfrastructureError, LetterStatsError, PresentationError, PresentationResult, Result,
    StreamError,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{LetterCount, LetterKey, fold_upper, is_letter};
