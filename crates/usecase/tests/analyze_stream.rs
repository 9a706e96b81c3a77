mod common;

use common::{StubStream, table};
use letter_stats_domain::CharClass;
use letter_stats_ports::CharacterStream;
use letter_stats_shared_kernel::{DomainError, LetterStatsError};
use letter_stats_usecase::{AnalysisPlan, AnalyzeStream, StatsKind};

#[test]
fn missing_stream_is_invalid_argument() {
    let usecase = AnalyzeStream::new(AnalysisPlan::new(StatsKind::Double));
    let err = usecase.run(None).expect_err("absent stream must fail");
    assert!(matches!(
        err,
        LetterStatsError::Domain(DomainError::InvalidArgument { ref name, .. }) if name == "stream"
    ));
}

#[test]
fn classic_single_letter_run_drops_vowels() {
    let mut stream = StubStream::new("Привет, world!");
    let plan = AnalysisPlan::new(StatsKind::Single).excluding(Some(CharClass::Vowel));
    let stats = AnalyzeStream::new(plan).run(Some(&mut stream)).expect("run succeeds");
    assert_eq!(
        stats,
        // Cyrillic "р" and Latin "r" are distinct letters.
        table(&[("П", 1), ("р", 1), ("в", 1), ("т", 1), ("w", 1), ("r", 1), ("l", 1), ("d", 1)])
    );
    assert!(stream.is_eof());
}

#[test]
fn classic_double_letter_run_drops_consonants() {
    let mut stream = StubStream::new("Aaa bookkeeper, ллама");
    let plan = AnalysisPlan::new(StatsKind::Double).excluding(Some(CharClass::Consonant));
    let stats = AnalyzeStream::new(plan).run(Some(&mut stream)).expect("run succeeds");
    assert_eq!(stats, table(&[("AA", 2), ("OO", 1), ("EE", 1)]));
}

#[test]
fn without_exclusion_everything_is_kept() {
    let mut stream = StubStream::new("Aaa bookkeeper");
    let stats = AnalyzeStream::new(AnalysisPlan::new(StatsKind::Double))
        .run(Some(&mut stream))
        .expect("run succeeds");
    assert_eq!(stats, table(&[("AA", 2), ("OO", 1), ("KK", 1), ("EE", 1)]));
}
