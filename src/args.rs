use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use letter_stats_domain::CharClass;
use letter_stats_usecase::DEFAULT_TOTAL_LABEL;

use crate::options::{OutputFormat, PassSelection, SinkKind};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "letter_stats",
    version = crate::VERSION,
    about = "Letter and doubled-letter frequency statistics",
    group(
        clap::ArgGroup::new("input_source")
            .args(["inputs", "text"])
            .required(true)
            .multiple(false)
    )
)]
pub struct Args {
    /// Input files. With two files the first feeds the single-letter pass and
    /// the second the double-letter pass.
    #[arg(value_hint = ValueHint::FilePath)]
    pub inputs: Vec<PathBuf>,

    /// Analyze this string instead of files
    #[arg(long, help_heading = "Input")]
    pub text: Option<String>,

    /// Passes to run
    #[arg(long, value_enum, default_value = "both", help_heading = "Analysis")]
    pub pass: PassSelection,

    /// Remove entries containing this class from the single-letter stats (vowel, consonant)
    #[arg(long, help_heading = "Analysis")]
    pub exclude_single: Option<CharClass>,

    /// Remove entries containing this class from the double-letter stats (vowel, consonant)
    #[arg(long, help_heading = "Analysis")]
    pub exclude_double: Option<CharClass>,

    /// Drop vowels from single letters and consonants from pairs
    #[arg(long, conflicts_with_all = ["exclude_single", "exclude_double"], help_heading = "Analysis")]
    pub classic: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: OutputFormat,

    /// Report destination
    #[arg(long, value_enum, default_value = "stdout", help_heading = "Output")]
    pub sink: SinkKind,

    /// Write the report to this file instead of stdout
    #[arg(long, short, value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,

    /// Label of the closing total line
    #[arg(long, default_value = DEFAULT_TOTAL_LABEL, help_heading = "Output")]
    pub total_label: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_files_and_flags() {
        let args = Args::try_parse_from([
            "letter_stats",
            "a.txt",
            "b.txt",
            "--exclude-single",
            "vowel",
            "--format",
            "json",
            "-vv",
        ])
        .expect("valid args");
        assert_eq!(args.inputs, [PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert_eq!(args.exclude_single, Some(CharClass::Vowel));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.total_label, "TOTAL");
    }

    #[test]
    fn text_and_files_are_exclusive() {
        let err = Args::try_parse_from(["letter_stats", "a.txt", "--text", "abc"]).expect_err("exclusive inputs");
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn some_input_is_required() {
        assert!(Args::try_parse_from(["letter_stats"]).is_err());
    }

    #[test]
    fn classic_conflicts_with_explicit_exclusions() {
        assert!(Args::try_parse_from(["letter_stats", "--text", "x", "--classic", "--exclude-double", "vowel"]).is_err());
    }

    #[test]
    fn unknown_class_is_rejected() {
        assert!(Args::try_parse_from(["letter_stats", "--text", "x", "--exclude-single", "digits"]).is_err());
    }
}
