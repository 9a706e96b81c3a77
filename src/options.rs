use clap::ValueEnum;

/// Report rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `key : count` lines with a total line
    #[default]
    Text,
    Json,
    /// Requires the `yaml` feature
    Yaml,
}

/// Where report lines go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SinkKind {
    #[default]
    Stdout,
    /// Each line becomes an info-level log record
    Log,
}

/// Which statistics passes to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PassSelection {
    Single,
    Double,
    #[default]
    Both,
}
