//! # linefuzz
//!
//! linefuzz is an embedded fuzzy line-search library. It loads a text
//! corpus into a length-bucketed in-memory index once, then answers
//! "which lines are within `k` edits of this pattern" by scanning only
//! the buckets a match could possibly live in, one parallel task per
//! bucket.
//!
//! ## Features
//!
//! - Length-bucketed index built once from a file, immutable afterwards
//!   and safe for concurrent lookups
//! - Enumerative mbleven check for distances up to 3, rolling-row
//!   Wagner-Fischer beyond that
//! - Optional key/value line splitting with exact original-line
//!   reconstruction in results
//!
//! ## Example
//!
//! ```rust
//! use linefuzz::{LineIndex, SearcherConfig};
//!
//! let config = SearcherConfig::new();
//! let index = LineIndex::from_lines(["kitten", "sitting", "bitten"], &config).unwrap();
//!
//! let matches = index.lookup("mitten", 1).unwrap();
//! assert!(matches.contains(&"kitten".to_string()));
//! assert!(matches.contains(&"bitten".to_string()));
//! ```
//!
//! Distances are computed over bytes, positionally; the engine is not
//! Unicode-aware.

mod config;
mod distance;
mod entry;
mod error;
mod index;
mod search;
mod searcher;

// Re-export public API
pub use config::{OversizedLine, SearcherConfig, SeparatorRule};
pub use distance::{mbleven, wagner_fischer, within_distance, MAX_SEQUENCE_LEN};
pub use entry::LineEntry;
pub use error::{LineFuzzError, Result};
pub use index::{IndexStats, LineIndex};
pub use searcher::Searcher;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
