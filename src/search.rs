use rayon::prelude::*;
use smallvec::SmallVec;

use crate::distance::{mbleven, wagner_fischer, MAX_SEQUENCE_LEN, MBLEVEN_MAX_DISTANCE};
use crate::entry::LineEntry;
use crate::error::{LineFuzzError, Result};
use crate::index::LineIndex;

/// Bounded-distance check shared by every bucket scan of one lookup
type DistanceCheck = fn(&str, &str, usize) -> bool;

impl LineIndex {
    /// Return every indexed line whose key part is within `max_distance`
    /// edits of `pattern`.
    ///
    /// An edit changes the key length by at most one, so only buckets
    /// whose key length is within `max_distance` of the pattern length
    /// can hold a match. Each candidate bucket is scanned as its own
    /// parallel task and the per-bucket results are concatenated once
    /// every task has finished. Result order is unspecified; within a
    /// failed lookup no partial results are returned.
    pub fn lookup(&self, pattern: &str, max_distance: usize) -> Result<Vec<String>> {
        if max_distance == 0 {
            return Err(LineFuzzError::InvalidDistance(0));
        }
        if pattern.len() > MAX_SEQUENCE_LEN {
            return Err(LineFuzzError::CapacityError {
                length: pattern.len(),
                max: MAX_SEQUENCE_LEN,
            });
        }

        // One strategy per lookup: enumerative for small thresholds, the
        // rolling-row dynamic program beyond that.
        let check: DistanceCheck = if max_distance <= MBLEVEN_MAX_DISTANCE {
            mbleven
        } else {
            wagner_fischer
        };

        let keys = self.candidate_keys(pattern.len(), max_distance);
        let matches = keys
            .as_slice()
            .par_iter()
            .map(|&key_len| match self.bucket(key_len) {
                Some(entries) => scan_bucket(entries, pattern, max_distance, check),
                None => Vec::new(),
            })
            .reduce(Vec::new, |mut all, mut part| {
                all.append(&mut part);
                all
            });

        Ok(matches)
    }

    /// Key lengths a match could live under. Saturating arithmetic keeps
    /// short patterns from wrapping below zero, and the longest indexed
    /// key caps the range from above.
    fn candidate_keys(&self, pattern_len: usize, max_distance: usize) -> SmallVec<[usize; 8]> {
        let shortest = pattern_len.saturating_sub(max_distance);
        let longest = pattern_len
            .saturating_add(max_distance)
            .min(self.max_key_len());
        (shortest..=longest).collect()
    }
}

/// Sequentially scan one bucket, reconstructing the original line for
/// every entry whose key part passes the distance check
fn scan_bucket(
    entries: &[LineEntry],
    pattern: &str,
    max_distance: usize,
    check: DistanceCheck,
) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| check(pattern, entry.key(), max_distance))
        .map(LineEntry::original)
        .collect()
}
