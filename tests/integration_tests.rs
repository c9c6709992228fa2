use std::io::Write;

use levenshtein::levenshtein;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::NamedTempFile;

use linefuzz::{
    mbleven, wagner_fischer, within_distance, LineFuzzError, LineIndex, Searcher, SearcherConfig,
    SeparatorRule,
};

fn corpus_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

fn sorted(mut results: Vec<String>) -> Vec<String> {
    results.sort();
    results
}

/// Reference result: scan every line, full distance, no bucket pruning.
/// Whole-line keying, duplicates preserved.
fn brute_force(lines: &[&str], pattern: &str, max_distance: usize) -> Vec<String> {
    let mut matches: Vec<String> = lines
        .iter()
        .filter(|line| !line.is_empty())
        .filter(|line| levenshtein(pattern, line) <= max_distance)
        .map(|line| line.to_string())
        .collect();
    matches.sort();
    matches
}

/// Random lowercase word over a small alphabet, so random pairs land
/// near the distance thresholds often enough to be interesting
fn random_word(rng: &mut StdRng) -> String {
    let len = rng.gen_range(0..10);
    (0..len)
        .map(|_| char::from(b'a' + rng.gen_range(0..4u8)))
        .collect()
}

#[test]
fn test_open_missing_file() {
    let result = Searcher::open("missing_file_path", "");
    assert!(matches!(result, Err(LineFuzzError::IoError(_))));
}

#[test]
fn test_full_workflow() {
    let file = corpus_file(&["kitten", "sitting", "bitten", "kitchen"]);
    let searcher = Searcher::open(file.path(), "").unwrap();

    assert_eq!(searcher.len(), 4);
    assert_eq!(searcher.stats().indexed, 4);
    assert_eq!(searcher.index().bucket_count(), 2);

    let matches = sorted(searcher.lookup("mitten", 1).unwrap());
    assert_eq!(matches, ["bitten", "kitten"]);
}

#[test]
fn test_kitten_scenario_against_reference() {
    let lines = ["kitten", "sitting", "bitten", "kitchen"];
    let file = corpus_file(&lines);
    let searcher = Searcher::open(file.path(), "").unwrap();

    let matches = sorted(searcher.lookup("kitten", 2).unwrap());
    assert_eq!(matches, brute_force(&lines, "kitten", 2));

    // Spell the boundary out: kitchen is exactly two edits away and is
    // in; sitting is three and is out.
    assert_eq!(levenshtein("kitten", "kitchen"), 2);
    assert_eq!(levenshtein("kitten", "sitting"), 3);
    assert!(matches.contains(&"kitchen".to_string()));
    assert!(!matches.contains(&"sitting".to_string()));
}

#[test]
fn test_separated_lookup_returns_whole_line() {
    let file = corpus_file(&["abc,value1"]);
    let searcher = Searcher::open(file.path(), ",").unwrap();

    let matches = searcher.lookup("abd", 1).unwrap();
    assert_eq!(matches, ["abc,value1"]);
}

#[test]
fn test_whole_line_sanity() {
    let lines = [
        "firstline",
        "secondline",
        "thirdline",
        "fourthline",
        "fifthline",
        "first.line",
        "second.line",
        "third.line",
        "fourth.line",
        "fourthhhhh.line",
        "fifth.line",
        "forthlines",
    ];
    let file = corpus_file(&lines);
    let searcher = Searcher::open(file.path(), "").unwrap();

    assert!(searcher.lookup("a", 1).unwrap().is_empty());
    assert_eq!(
        sorted(searcher.lookup("forthline", 1).unwrap()),
        ["forthlines", "fourthline"]
    );
    assert_eq!(
        sorted(searcher.lookup("firstline", 1).unwrap()),
        ["first.line", "firstline"]
    );
}

#[test]
fn test_separated_sanity() {
    let lines = [
        "firstline",
        "secondline",
        "thirdline",
        "fourthline",
        "fifthline",
        "first.line",
        "second.line",
        "third.line",
        "fourth.line",
        "fourthhhhh.line",
        "fifth.line",
        "forthlines",
    ];
    let file = corpus_file(&lines);
    // Separator-less lines fall back to whole-line keys under this rule
    let config = SearcherConfig::new()
        .with_separators(".")
        .with_separator_rule(SeparatorRule::IndexWholeLine);
    let searcher = Searcher::open_with_config(file.path(), config).unwrap();

    assert_eq!(
        sorted(searcher.lookup("forthline", 1).unwrap()),
        ["forthlines", "fourthline"]
    );
    assert_eq!(searcher.lookup("fist", 1).unwrap(), ["first.line"]);
    assert_eq!(
        sorted(searcher.lookup("fourth", 3).unwrap()),
        ["fifth.line", "fourth.line"]
    );
    assert_eq!(
        sorted(searcher.lookup("fourth", 4).unwrap()),
        [
            "fifth.line",
            "first.line",
            "fourth.line",
            "fourthhhhh.line",
            "fourthline"
        ]
    );
}

#[test]
fn test_symmetry() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let a = random_word(&mut rng);
        let b = random_word(&mut rng);
        for k in 1..=3 {
            assert_eq!(mbleven(&a, &b, k), mbleven(&b, &a, k), "({a:?}, {b:?}, {k})");
        }
        for k in 1..=6 {
            assert_eq!(
                wagner_fischer(&a, &b, k),
                wagner_fischer(&b, &a, k),
                "({a:?}, {b:?}, {k})"
            );
        }
    }
}

#[test]
fn test_threshold_monotonicity() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..500 {
        let a = random_word(&mut rng);
        let b = random_word(&mut rng);
        for k in 1..=5 {
            if within_distance(&a, &b, k) {
                assert!(
                    within_distance(&a, &b, k + 1),
                    "match at {k} but not {} for ({a:?}, {b:?})",
                    k + 1
                );
            }
        }
    }
}

#[test]
fn test_strategies_agree_with_reference() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..1000 {
        let a = random_word(&mut rng);
        let b = random_word(&mut rng);
        let distance = levenshtein(&a, &b);
        for k in 1..=3 {
            let expected = distance <= k;
            assert_eq!(mbleven(&a, &b, k), expected, "mbleven ({a:?}, {b:?}, {k})");
            assert_eq!(
                wagner_fischer(&a, &b, k),
                expected,
                "wagner_fischer ({a:?}, {b:?}, {k})"
            );
        }
        for k in 4..=6 {
            assert_eq!(
                wagner_fischer(&a, &b, k),
                distance <= k,
                "wagner_fischer ({a:?}, {b:?}, {k})"
            );
        }
    }
}

#[test]
fn test_bucket_pruning_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(17);
    let words: Vec<String> = (0..300).map(|_| random_word(&mut rng)).collect();
    let lines: Vec<&str> = words.iter().map(String::as_str).collect();

    let config = SearcherConfig::new();
    let index = LineIndex::from_lines(&lines, &config).unwrap();

    for _ in 0..50 {
        let pattern = random_word(&mut rng);
        for k in 1..=5 {
            assert_eq!(
                sorted(index.lookup(&pattern, k).unwrap()),
                brute_force(&lines, &pattern, k),
                "pruned lookup diverged for ({pattern:?}, {k})"
            );
        }
    }
}

#[test]
fn test_rebuild_is_idempotent() {
    let lines = ["kitten", "sitting", "bitten", "kitchen", "mitten"];
    let file = corpus_file(&lines);

    let first = Searcher::open(file.path(), "").unwrap();
    let second = Searcher::open(file.path(), "").unwrap();

    assert_eq!(first.stats(), second.stats());
    assert_eq!(
        sorted(first.lookup("kitten", 2).unwrap()),
        sorted(second.lookup("kitten", 2).unwrap())
    );
}

#[test]
fn test_distance_equal_to_pattern_length() {
    // Bucket-key arithmetic runs below zero here unless guarded
    let file = corpus_file(&["ab", "a", "xyz"]);
    let searcher = Searcher::open(file.path(), "").unwrap();

    let matches = sorted(searcher.lookup("ab", 2).unwrap());
    assert_eq!(matches, ["a", "ab"]);
}

#[test]
fn test_pattern_longer_than_any_key_is_not_an_error() {
    let file = corpus_file(&["kitten", "bitten"]);
    let searcher = Searcher::open(file.path(), "").unwrap();

    let matches = searcher.lookup("a-pattern-much-longer-than-any-key", 2).unwrap();
    assert!(matches.is_empty());
}

#[test]
fn test_separator_rule_variants() {
    let lines = ["key,value", ",leading", "plain"];

    let drop_missing = SearcherConfig::new().with_separators(",");
    let index = LineIndex::from_lines(lines, &drop_missing).unwrap();
    assert_eq!(index.len(), 2);
    assert_eq!(index.stats().dropped, 1);

    let drop_leading = SearcherConfig::new()
        .with_separators(",")
        .with_separator_rule(SeparatorRule::DropMissingOrLeading);
    let index = LineIndex::from_lines(lines, &drop_leading).unwrap();
    assert_eq!(index.len(), 1);
    assert_eq!(index.stats().dropped, 2);

    let whole_line = SearcherConfig::new()
        .with_separators(",")
        .with_separator_rule(SeparatorRule::IndexWholeLine);
    let index = LineIndex::from_lines(lines, &whole_line).unwrap();
    assert_eq!(index.len(), 3);
    assert_eq!(index.stats().dropped, 0);
    assert_eq!(index.lookup("plain", 1).unwrap(), ["plain"]);
}

#[test]
fn test_concurrent_lookups_share_one_index() {
    let mut rng = StdRng::seed_from_u64(23);
    let words: Vec<String> = (0..200).map(|_| random_word(&mut rng)).collect();
    let lines: Vec<&str> = words.iter().map(String::as_str).collect();
    let file = corpus_file(&lines);

    let searcher = Searcher::open(file.path(), "").unwrap();
    let expected = sorted(searcher.lookup("abab", 2).unwrap());

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| sorted(searcher.lookup("abab", 2).unwrap())))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
