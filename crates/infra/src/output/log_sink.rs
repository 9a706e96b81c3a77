use letter_stats_ports::LineSink;
use letter_stats_shared_kernel::Result;
use log::info;

/// Log target carrying report lines.
pub const REPORT_TARGET: &str = "letter_stats::report";

/// Emits each report line as an info-level log record under [`REPORT_TARGET`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl LineSink for LogSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        info!(target: REPORT_TARGET, "{line}");
        Ok(())
    }
}
