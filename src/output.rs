use letter_stats_domain::LetterStatsTable;
use letter_stats_infra::{LogSink, StdoutSink, WriterSink, output::write_block};
use letter_stats_ports::LineSink;
use letter_stats_shared_kernel::Result;
use letter_stats_usecase::{Reporter, StatsReport};

use crate::{
    config::Config,
    options::{OutputFormat, SinkKind},
};

/// Sink selected by the configuration.
pub fn open_sink(config: &Config) -> Result<Box<dyn LineSink>> {
    let sink: Box<dyn LineSink> = match (config.sink, &config.output_path) {
        (SinkKind::Log, _) => Box::new(LogSink),
        (SinkKind::Stdout, Some(path)) => Box::new(WriterSink::create(path)?),
        (SinkKind::Stdout, None) => Box::new(StdoutSink),
    };
    Ok(sink)
}

/// Text reports are written as soon as a pass finishes.
pub fn emit_text(sink: &mut dyn LineSink, table: &LetterStatsTable, config: &Config) -> Result<()> {
    Reporter::new(sink).with_total_label(config.total_label.as_str()).report(table)?;
    Ok(())
}

/// Structured formats are written once, holding every pass.
pub fn emit_structured(sink: &mut dyn LineSink, reports: &[StatsReport], format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text => return Ok(()),
        OutputFormat::Json => letter_stats_infra::output::render_json(reports)?,
        #[cfg(feature = "yaml")]
        OutputFormat::Yaml => letter_stats_infra::output::render_yaml(reports)?,
        #[cfg(not(feature = "yaml"))]
        OutputFormat::Yaml => return Ok(()),
    };
    write_block(sink, &rendered)
}
