use serde::{Deserialize, Serialize};

/// Policy for lines that do not split cleanly when a separator set is
/// configured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SeparatorRule {
    /// Drop lines that contain no separator character (default)
    #[default]
    DropMissing,

    /// Drop lines that contain no separator character, and lines whose
    /// first character is a separator (the key part would be empty)
    DropMissingOrLeading,

    /// Key lines that contain no separator character by their whole content
    IndexWholeLine,
}

/// Policy for lines whose key part exceeds the longest supported sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OversizedLine {
    /// Drop the offending line and count it in the index stats (default)
    #[default]
    Skip,

    /// Abort the whole build with a capacity error
    Fail,
}

/// Searcher configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearcherConfig {
    /// Characters that split a line into a key part and a value part.
    /// The split happens at the first occurrence of any of them. Empty
    /// means the whole line is the key.
    pub separators: String,

    /// What to do with lines the separator set cannot split
    pub separator_rule: SeparatorRule,

    /// What to do with lines whose key part is longer than the engine supports
    pub oversized_line: OversizedLine,
}

impl Default for SearcherConfig {
    fn default() -> Self {
        Self {
            separators: String::new(),
            separator_rule: SeparatorRule::default(),
            oversized_line: OversizedLine::default(),
        }
    }
}

impl SearcherConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the separator character set
    pub fn with_separators(mut self, separators: impl Into<String>) -> Self {
        self.separators = separators.into();
        self
    }

    /// Set the policy for lines the separator set cannot split
    pub fn with_separator_rule(mut self, rule: SeparatorRule) -> Self {
        self.separator_rule = rule;
        self
    }

    /// Set the policy for lines whose key part is too long
    pub fn with_oversized_line(mut self, policy: OversizedLine) -> Self {
        self.oversized_line = policy;
        self
    }

    /// Split a line into its key part and the rest of the line.
    ///
    /// The rest starts with the separator character itself, so
    /// concatenating the two halves reconstructs the input line exactly.
    /// Returns `None` when the configured rule drops the line.
    pub(crate) fn split_line<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        if self.separators.is_empty() {
            return Some((line, ""));
        }

        match line.find(|c: char| self.separators.contains(c)) {
            Some(0) if self.separator_rule == SeparatorRule::DropMissingOrLeading => None,
            Some(idx) => Some((&line[..idx], &line[idx..])),
            None if self.separator_rule == SeparatorRule::IndexWholeLine => Some((line, "")),
            None => None,
        }
    }
}
