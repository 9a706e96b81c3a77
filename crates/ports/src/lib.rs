//! # Ports
//!
//! Interface definitions for external collaborators.
//!
//! - [`stream`]: resettable sequential character sources
//! - [`output`]: line-oriented report sinks
//!
//! The use cases depend only on these traits; concrete adapters live in the
//! infrastructure crate.

#![allow(clippy::multiple_crate_versions)]

pub mod output;
pub mod stream;

pub use output::LineSink;
pub use stream::CharacterStream;
