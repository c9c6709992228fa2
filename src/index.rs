use std::io::BufRead;

use rustc_hash::FxHashMap;

use crate::config::{OversizedLine, SearcherConfig};
use crate::distance::MAX_SEQUENCE_LEN;
use crate::entry::LineEntry;
use crate::error::{LineFuzzError, Result};

/// Counters describing what the index builder did with its input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Lines stored in the index
    pub indexed: usize,

    /// Lines dropped by the separator rule
    pub dropped: usize,

    /// Lines dropped because their key part exceeded the supported length
    pub oversized: usize,
}

/// The length-bucketed corpus index.
///
/// Entries are grouped by the byte length of their key part, so a lookup
/// only ever scans buckets whose length is within the requested distance
/// of the pattern length. The index is built once and never mutated
/// afterwards, which is what makes unsynchronized concurrent lookups
/// safe. Within a bucket, entries keep file order.
#[derive(Debug, Clone)]
pub struct LineIndex {
    buckets: FxHashMap<usize, Vec<LineEntry>>,
    max_key_len: usize,
    stats: IndexStats,
}

impl LineIndex {
    /// Build an index from raw text lines. Empty lines are skipped.
    pub fn from_lines<I, S>(lines: I, config: &SearcherConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = Builder::new(config);
        for line in lines {
            builder.add_line(line.as_ref())?;
        }
        Ok(builder.finish())
    }

    /// Build an index from a buffered reader, one record per line
    pub fn from_reader<R: BufRead>(reader: R, config: &SearcherConfig) -> Result<Self> {
        let mut builder = Builder::new(config);
        for line in reader.lines() {
            builder.add_line(&line?)?;
        }
        Ok(builder.finish())
    }

    /// Entries whose key part is exactly `key_len` bytes long
    pub fn bucket(&self, key_len: usize) -> Option<&[LineEntry]> {
        self.buckets.get(&key_len).map(Vec::as_slice)
    }

    /// Total number of indexed entries
    pub fn len(&self) -> usize {
        self.stats.indexed
    }

    /// Whether the index holds no entries
    pub fn is_empty(&self) -> bool {
        self.stats.indexed == 0
    }

    /// Number of distinct key lengths
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Longest key part in the index, in bytes
    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    /// What the builder did with its input
    pub fn stats(&self) -> IndexStats {
        self.stats
    }
}

/// Accumulates lines into buckets; consumed by `finish`
struct Builder<'a> {
    config: &'a SearcherConfig,
    buckets: FxHashMap<usize, Vec<LineEntry>>,
    max_key_len: usize,
    stats: IndexStats,
}

impl<'a> Builder<'a> {
    fn new(config: &'a SearcherConfig) -> Self {
        Self {
            config,
            buckets: FxHashMap::default(),
            max_key_len: 0,
            stats: IndexStats::default(),
        }
    }

    fn add_line(&mut self, line: &str) -> Result<()> {
        if line.is_empty() {
            return Ok(());
        }

        let Some((key, rest)) = self.config.split_line(line) else {
            self.stats.dropped += 1;
            return Ok(());
        };

        if key.len() > MAX_SEQUENCE_LEN {
            return match self.config.oversized_line {
                OversizedLine::Skip => {
                    self.stats.oversized += 1;
                    Ok(())
                }
                OversizedLine::Fail => Err(LineFuzzError::CapacityError {
                    length: key.len(),
                    max: MAX_SEQUENCE_LEN,
                }),
            };
        }

        self.max_key_len = self.max_key_len.max(key.len());
        self.buckets
            .entry(key.len())
            .or_default()
            .push(LineEntry::new(key, rest));
        self.stats.indexed += 1;

        Ok(())
    }

    fn finish(self) -> LineIndex {
        LineIndex {
            buckets: self.buckets,
            max_key_len: self.max_key_len,
            stats: self.stats,
        }
    }
}
