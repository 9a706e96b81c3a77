// Fixture helpers shared by the integration tests.
use std::{io::Write, path::PathBuf};

use tempfile::TempDir;

/// Temporary directory holding named text fixtures.
pub struct Fixtures {
    dir: TempDir,
}

#[allow(dead_code)]
impl Fixtures {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().expect("temp dir") }
    }

    pub fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        let mut file = std::fs::File::create(&path).expect("create fixture");
        file.write_all(contents.as_bytes()).expect("write fixture");
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
