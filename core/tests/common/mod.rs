// Shared fixture dictionaries for the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

pub const UNIGRAMS: &str = "\
the 100
quick 50
news 100
paper 90
base 50
ball 50
baseball 100
sugar 80
salt 70
corn 40
syrup 30
and 200
";

pub const BIGRAMS: &str = "\
the quick 40
corn syrup 25
";

/// Dictionary files written to a temporary directory that lives as long as
/// the returned guard.
pub struct Fixture {
    pub dir: TempDir,
    pub unigrams: PathBuf,
    pub bigrams: PathBuf,
}

pub fn write_fixture(unigrams: &str, bigrams: &str) -> Fixture {
    let dir = tempfile::tempdir().expect("tempdir");
    let unigram_path = dir.path().join("unigrams.txt");
    let bigram_path = dir.path().join("bigrams.txt");
    fs::write(&unigram_path, unigrams).expect("write unigrams");
    fs::write(&bigram_path, bigrams).expect("write bigrams");
    Fixture {
        dir,
        unigrams: unigram_path,
        bigrams: bigram_path,
    }
}

pub fn default_fixture() -> Fixture {
    write_fixture(UNIGRAMS, BIGRAMS)
}
