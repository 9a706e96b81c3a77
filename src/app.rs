use letter_stats_infra::{FileCharStream, MemoryStream};
use letter_stats_ports::CharacterStream;
use letter_stats_shared_kernel::{DomainError, ErrorContext, Result};
use letter_stats_usecase::{AnalysisPlan, AnalyzeStream, StatsReport};
use log::info;

use crate::{
    config::{Config, InputSource},
    options::OutputFormat,
    output,
};

/// Run every configured pass and write the reports.
///
/// Passes run one after another; a source shared by both passes is opened
/// once and rewound by each pass.
///
/// # Errors
///
/// The first input, analysis, or output failure.
pub fn run(config: &Config) -> Result<()> {
    let mut sink = output::open_sink(config)?;
    let mut streams: [Option<Box<dyn CharacterStream>>; 2] = [None, None];
    let mut reports = Vec::with_capacity(config.passes.len());

    for &kind in &config.passes {
        let slot = config.input.slot_for(kind);
        let stream = match &mut streams[slot] {
            Some(stream) => stream,
            vacant => vacant.insert(open_stream(&config.input, slot)?),
        };

        let plan = AnalysisPlan::new(kind).excluding(config.exclusion_for(kind));
        let table = AnalyzeStream::new(plan)
            .run(Some(stream.as_mut()))
            .with_context(|| format!("{kind}-letter pass over {}", config.input.describe(slot)))?;

        if config.format == OutputFormat::Text {
            output::emit_text(sink.as_mut(), &table, config)?;
        } else {
            reports.push(StatsReport::from_table(kind, &table));
        }
    }

    output::emit_structured(sink.as_mut(), &reports, config.format)?;
    info!("finished {} pass(es)", config.passes.len());
    Ok(())
}

fn open_stream(input: &InputSource, slot: usize) -> Result<Box<dyn CharacterStream>> {
    let stream: Box<dyn CharacterStream> = match input {
        InputSource::Text(text) => Box::new(MemoryStream::new(text)),
        InputSource::Files(paths) => {
            let path = paths.get(slot).ok_or_else(|| DomainError::InvalidArgument {
                name: "input".into(),
                reason: format!("no input file for slot {slot}"),
            })?;
            info!("reading {}", path.display());
            Box::new(FileCharStream::open(path)?)
        }
    };
    Ok(stream)
}
