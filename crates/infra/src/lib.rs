// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod output;
pub mod stream;

pub use output::{LogSink, StdoutSink, WriterSink};
pub use stream::{FileCharStream, MemoryStream};
