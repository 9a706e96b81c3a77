use letter_stats_domain::{CharClass, LetterStatsTable};
use letter_stats_ports::CharacterStream;
use letter_stats_shared_kernel::{DomainError, Result};
use log::{debug, info};

use crate::{
    dto::StatsKind,
    engine::{double_letter_stats, filter_by_character_class, single_letter_stats},
};

/// What to compute from one stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisPlan {
    pub kind: StatsKind,
    pub exclude: Option<CharClass>,
}

impl AnalysisPlan {
    pub fn new(kind: StatsKind) -> Self {
        Self { kind, exclude: None }
    }

    #[must_use]
    pub fn excluding(mut self, class: Option<CharClass>) -> Self {
        self.exclude = class;
        self
    }
}

/// Runs one statistics pass and the optional class filter.
pub struct AnalyzeStream {
    plan: AnalysisPlan,
}

impl AnalyzeStream {
    pub fn new(plan: AnalysisPlan) -> Self {
        Self { plan }
    }

    /// # Errors
    ///
    /// `DomainError::InvalidArgument` when no stream is supplied, otherwise
    /// any stream failure.
    pub fn run(&self, stream: Option<&mut dyn CharacterStream>) -> Result<LetterStatsTable> {
        let stream = stream.ok_or_else(|| DomainError::InvalidArgument {
            name: "stream".into(),
            reason: format!("no character stream given for the {} pass", self.plan.kind),
        })?;

        let mut table = match self.plan.kind {
            StatsKind::Single => single_letter_stats(stream)?,
            StatsKind::Double => double_letter_stats(stream)?,
        };

        if let Some(class) = self.plan.exclude {
            let before = table.len();
            filter_by_character_class(&mut table, class);
            debug!("{} pass: {before} entries before {class} filter, {} after", self.plan.kind, table.len());
        }

        info!("{} pass finished with {} entries", self.plan.kind, table.len());
        Ok(table)
    }
}
