pub mod console;
pub mod log_sink;
pub mod render;

pub use console::{StdoutSink, WriterSink};
pub use log_sink::{LogSink, REPORT_TARGET};
pub use render::{render_json, write_block};
#[cfg(feature = "yaml")]
pub use render::render_yaml;
