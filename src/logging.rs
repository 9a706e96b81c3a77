use env_logger::Builder;
use letter_stats_infra::output::REPORT_TARGET;
use log::LevelFilter;

use crate::options::SinkKind;

/// Level for `-v` occurrences.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Logger configuration: `-v` level, then `filters` (`RUST_LOG` syntax), then
/// the report target forced to `Info` when reports go through the log.
pub fn builder(verbosity: u8, sink: SinkKind, filters: Option<&str>) -> Builder {
    let mut builder = Builder::new();
    builder.filter_level(level_for(verbosity));
    if let Some(filters) = filters {
        builder.parse_filters(filters);
    }
    if sink == SinkKind::Log {
        builder.filter_module(REPORT_TARGET, LevelFilter::Info);
    }
    builder.target(env_logger::Target::Stderr).format_timestamp(None);
    builder
}

/// Install the stderr logger.
pub fn init(verbosity: u8, sink: SinkKind) {
    let filters = std::env::var("RUST_LOG").ok();
    // Fails only when a logger is already installed; that one stays in place.
    let _ = builder(verbosity, sink, filters.as_deref()).try_init();
}

#[cfg(test)]
mod tests {
    use log::{Level, Log, Metadata};

    use super::*;

    fn enabled(builder: &mut Builder, target: &str, level: Level) -> bool {
        builder.build().enabled(&Metadata::builder().target(target).level(level).build())
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }

    #[test]
    fn log_sink_keeps_report_lines_under_quiet_filters() {
        let mut quiet = builder(0, SinkKind::Log, Some("warn"));
        assert!(enabled(&mut quiet, REPORT_TARGET, Level::Info));
        assert!(!enabled(&mut quiet, "letter_stats_usecase::orchestrator", Level::Info));

        let mut off = builder(0, SinkKind::Log, Some("off"));
        assert!(enabled(&mut off, REPORT_TARGET, Level::Info));
    }

    #[test]
    fn stdout_sink_follows_filters() {
        let mut quiet = builder(0, SinkKind::Stdout, Some("warn"));
        assert!(!enabled(&mut quiet, REPORT_TARGET, Level::Info));

        let mut verbose = builder(1, SinkKind::Stdout, None);
        assert!(enabled(&mut verbose, "letter_stats", Level::Info));
    }
}
