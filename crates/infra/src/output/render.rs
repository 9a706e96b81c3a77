use letter_stats_ports::LineSink;
use letter_stats_shared_kernel::Result;
use letter_stats_usecase::StatsReport;

/// Pretty-printed JSON array holding every report of a run.
///
/// # Errors
///
/// `InfrastructureError::Serialization` if serde fails.
pub fn render_json(reports: &[StatsReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

#[cfg(feature = "yaml")]
pub fn render_yaml(reports: &[StatsReport]) -> Result<String> {
    Ok(serde_yaml::to_string(reports)?)
}

/// Push a multi-line block through a line sink.
pub fn write_block(sink: &mut dyn LineSink, block: &str) -> Result<()> {
    for line in block.lines() {
        sink.write_line(line)?;
    }
    sink.flush()
}
