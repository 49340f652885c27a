//! Golden report corpora for pareto integration tests and benchmarks.
//!
//! Each corpus is a JSON file under `corpora/` holding the records to rank,
//! an optional reference date, and whatever outcome the scenario pins down.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// A named corpus plus its expected ranking outcome.
///
/// Generic over the record type so this crate stays free of engine types.
#[derive(Debug, Clone, Deserialize)]
pub struct CorpusFixture<R> {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// ISO date recency is measured from.
    #[serde(default)]
    pub reference_date: Option<String>,
    pub records: Vec<R>,
    #[serde(default)]
    pub expected: ExpectedRanking,
}

/// Outcome assertions for a corpus. Absent fields are not checked.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExpectedRanking {
    pub cluster_count: Option<usize>,
    pub vocabulary_size: Option<usize>,
    /// Frequencies of the ranked problems, in rank order.
    pub frequencies: Option<Vec<usize>>,
    pub top_description: Option<String>,
    pub top_category: Option<String>,
    /// Words that must never show up in the word cloud.
    pub excluded_words: Vec<String>,
}

/// Root directory of the corpora folder.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("corpora")
}

/// Load and deserialize a JSON fixture file relative to `corpora/`.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load `corpora/{name}.json` as a typed corpus.
pub fn load_corpus<R: DeserializeOwned>(name: &str) -> CorpusFixture<R> {
    load_fixture(&format!("{name}.json"))
}

/// Read a fixture file as raw text, e.g. to feed a JSON-parsing source.
pub fn read_fixture(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in the corpora folder, sorted by file name.
pub fn list_corpora() -> Vec<PathBuf> {
    let dir = fixtures_root();
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    paths.sort();
    paths
}
