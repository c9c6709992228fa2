use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::config::SearcherConfig;
use crate::error::Result;
use crate::index::{IndexStats, LineIndex};

/// Main entry point for the linefuzz library.
///
/// Opening a corpus file reads and buckets every line up front; the
/// resulting index lives for the searcher's lifetime and is never
/// mutated, so lookups touch memory only and can run concurrently from
/// any number of threads.
#[derive(Debug)]
pub struct Searcher {
    index: LineIndex,
}

impl Searcher {
    /// Open a corpus file, splitting each line at the first occurrence
    /// of any character in `separators`. An empty `separators` keys
    /// every line by its whole content.
    pub fn open<P: AsRef<Path>>(path: P, separators: &str) -> Result<Self> {
        Self::open_with_config(path, SearcherConfig::new().with_separators(separators))
    }

    /// Open a corpus file with full control over the separator rule and
    /// the oversized-line policy
    pub fn open_with_config<P: AsRef<Path>>(path: P, config: SearcherConfig) -> Result<Self> {
        let file = File::open(path)?;
        let index = LineIndex::from_reader(BufReader::new(file), &config)?;
        Ok(Self { index })
    }

    /// Fuzzy search for `pattern`; see [`LineIndex::lookup`]
    pub fn lookup(&self, pattern: &str, max_distance: usize) -> Result<Vec<String>> {
        self.index.lookup(pattern, max_distance)
    }

    /// The underlying index
    pub fn index(&self) -> &LineIndex {
        &self.index
    }

    /// Number of indexed lines
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the corpus produced no indexed lines
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// What the build did with the input file
    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }
}
