use std::path::PathBuf;

use derive_builder::Builder;
use letter_stats_domain::CharClass;
use letter_stats_shared_kernel::{PresentationError, PresentationResult};
use letter_stats_usecase::{DEFAULT_TOTAL_LABEL, StatsKind};

use crate::{
    args::Args,
    options::{OutputFormat, PassSelection, SinkKind},
};

/// Where characters come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// One file for every pass, or two: singles from the first, pairs from the second.
    Files(Vec<PathBuf>),
    Text(String),
}

impl InputSource {
    /// One or two files are accepted.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Self::Files(paths) if paths.is_empty() => Err("no input file given".into()),
            Self::Files(paths) if paths.len() > 2 => Err("at most two input files are accepted".into()),
            _ => Ok(()),
        }
    }

    /// Index of the source feeding `kind`.
    pub fn slot_for(&self, kind: StatsKind) -> usize {
        match (self, kind) {
            (Self::Files(paths), StatsKind::Double) if paths.len() == 2 => 1,
            _ => 0,
        }
    }

    pub fn describe(&self, slot: usize) -> String {
        match self {
            Self::Files(paths) => paths.get(slot).map_or_else(String::new, |p| p.display().to_string()),
            Self::Text(_) => "<text>".to_string(),
        }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    pub input: InputSource,
    #[builder(default = "vec![StatsKind::Single, StatsKind::Double]")]
    pub passes: Vec<StatsKind>,
    #[builder(default)]
    pub exclude_single: Option<CharClass>,
    #[builder(default)]
    pub exclude_double: Option<CharClass>,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub sink: SinkKind,
    #[builder(default)]
    pub output_path: Option<PathBuf>,
    #[builder(default = "DEFAULT_TOTAL_LABEL.to_string()")]
    pub total_label: String,
}

impl ConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        self.input.as_ref().map_or(Ok(()), InputSource::validate)
    }
}

impl Config {
    pub fn exclusion_for(&self, kind: StatsKind) -> Option<CharClass> {
        match kind {
            StatsKind::Single => self.exclude_single,
            StatsKind::Double => self.exclude_double,
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = PresentationError;

    fn try_from(args: Args) -> PresentationResult<Self> {
        let input = input_from_args(&args)?;
        validate_output(&args)?;

        let passes = match args.pass {
            PassSelection::Single => vec![StatsKind::Single],
            PassSelection::Double => vec![StatsKind::Double],
            PassSelection::Both => vec![StatsKind::Single, StatsKind::Double],
        };
        let (exclude_single, exclude_double) = if args.classic {
            (Some(CharClass::Vowel), Some(CharClass::Consonant))
        } else {
            (args.exclude_single, args.exclude_double)
        };

        ConfigBuilder::default()
            .input(input)
            .passes(passes)
            .exclude_single(exclude_single)
            .exclude_double(exclude_double)
            .format(args.format)
            .sink(args.sink)
            .output_path(args.output)
            .total_label(args.total_label)
            .build()
            .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))
    }
}

fn input_from_args(args: &Args) -> PresentationResult<InputSource> {
    if let Some(text) = &args.text {
        return Ok(InputSource::Text(text.clone()));
    }
    let input = InputSource::Files(args.inputs.clone());
    input.validate().map_err(|reason| PresentationError::InvalidValue {
        flag: "INPUT".into(),
        value: args.inputs.len().to_string(),
        reason,
    })?;
    Ok(input)
}

fn validate_output(args: &Args) -> PresentationResult<()> {
    if args.sink == SinkKind::Log && args.format != OutputFormat::Text {
        return Err(PresentationError::InvalidValue {
            flag: "--sink".into(),
            value: "log".into(),
            reason: "the log sink only carries the text format".into(),
        });
    }
    if args.sink == SinkKind::Log && args.output.is_some() {
        return Err(PresentationError::InvalidValue {
            flag: "--sink".into(),
            value: "log".into(),
            reason: "cannot be combined with --output".into(),
        });
    }
    if args.format == OutputFormat::Yaml && !cfg!(feature = "yaml") {
        return Err(PresentationError::InvalidValue {
            flag: "--format".into(),
            value: "yaml".into(),
            reason: "built without the `yaml` feature".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn config(argv: &[&str]) -> PresentationResult<Config> {
        let mut full = vec!["letter_stats"];
        full.extend_from_slice(argv);
        Config::try_from(Args::try_parse_from(full).expect("args parse"))
    }

    #[test]
    fn defaults_run_both_passes_without_filters() {
        let cfg = config(&["in.txt"]).expect("config");
        assert_eq!(cfg.input, InputSource::Files(vec![PathBuf::from("in.txt")]));
        assert_eq!(cfg.passes, [StatsKind::Single, StatsKind::Double]);
        assert_eq!(cfg.exclusion_for(StatsKind::Single), None);
        assert_eq!(cfg.total_label, "TOTAL");
    }

    #[test]
    fn classic_preset_sets_both_exclusions() {
        let cfg = config(&["--text", "abc", "--classic"]).expect("config");
        assert_eq!(cfg.exclusion_for(StatsKind::Single), Some(CharClass::Vowel));
        assert_eq!(cfg.exclusion_for(StatsKind::Double), Some(CharClass::Consonant));
    }

    #[test]
    fn two_files_split_the_passes() {
        let cfg = config(&["one.txt", "two.txt"]).expect("config");
        assert_eq!(cfg.input.slot_for(StatsKind::Single), 0);
        assert_eq!(cfg.input.slot_for(StatsKind::Double), 1);
        assert_eq!(cfg.input.describe(1), "two.txt");
    }

    #[test]
    fn single_file_feeds_both_passes() {
        let cfg = config(&["one.txt", "--pass", "double"]).expect("config");
        assert_eq!(cfg.passes, [StatsKind::Double]);
        assert_eq!(cfg.input.slot_for(StatsKind::Double), 0);
    }

    #[test]
    fn rejects_three_files() {
        let err = config(&["a", "b", "c"]).expect_err("too many inputs");
        assert!(matches!(err, PresentationError::InvalidValue { ref flag, .. } if flag == "INPUT"));
    }

    #[test]
    fn builder_rejects_empty_or_oversized_file_lists() {
        let empty = ConfigBuilder::default().input(InputSource::Files(vec![])).build();
        assert!(empty.expect_err("empty list rejected").to_string().contains("no input file given"));

        let three = ConfigBuilder::default()
            .input(InputSource::Files(vec!["a".into(), "b".into(), "c".into()]))
            .build();
        assert!(three.is_err());

        assert!(ConfigBuilder::default().input(InputSource::Text(String::new())).build().is_ok());
    }

    #[test]
    fn log_sink_requires_text_format() {
        assert!(config(&["a", "--sink", "log", "--format", "json"]).is_err());
        assert!(config(&["a", "--sink", "log", "--output", "x.txt"]).is_err());
        assert!(config(&["a", "--sink", "log"]).is_ok());
    }
}
