//! Bounded edit-distance checks.
//!
//! Two interchangeable strategies answer "are these sequences within
//! `max_distance` edits of each other": [`mbleven`] enumerates the few
//! possible edit scripts for thresholds up to 3, and [`wagner_fischer`]
//! runs the classic dynamic program with a rolling row for anything
//! larger. Both compare sequences byte-wise.

/// Longest key or pattern, in bytes, the engine accepts
pub const MAX_SEQUENCE_LEN: usize = 99;

/// Largest threshold the enumerative check supports
pub(crate) const MBLEVEN_MAX_DISTANCE: usize = 3;

// Edit scripts consistent with a given (threshold, length difference)
// pair, oriented so the first sequence is the longer one: 'r' replaces a
// byte in both sequences, 'd' consumes a byte of the longer one only,
// 'i' a byte of the shorter one only. The row for threshold k and
// length difference d is SCRIPT_ROW_BASE[k - 1] + d.
const MBLEVEN_SCRIPTS: [&[&str]; 9] = [
    // k = 1
    &["r"],
    &["d"],
    // k = 2
    &["rr", "id", "di"],
    &["rd", "dr"],
    &["dd"],
    // k = 3
    &["rrr", "idr", "ird", "rid", "rdi", "dri", "dir"],
    &["rrd", "rdr", "drr", "idd", "did", "ddi"],
    &["rdd", "drd", "ddr"],
    &["ddd"],
];
const SCRIPT_ROW_BASE: [usize; 3] = [0, 2, 5];

/// Enumerative bounded-distance check for small thresholds.
///
/// For `max_distance` up to 3, only a handful of edit scripts are
/// consistent with the length difference of the two sequences, so trying
/// each of them is cheaper than the full dynamic program. The result is
/// symmetric in the two sequences. `max_distance == 0` degenerates to an
/// equality check.
///
/// # Panics
///
/// Panics if `max_distance` is greater than 3. Use [`wagner_fischer`] or
/// [`within_distance`] for larger thresholds.
pub fn mbleven(first: &str, second: &str, max_distance: usize) -> bool {
    if max_distance == 0 {
        return first == second;
    }
    assert!(
        max_distance <= MBLEVEN_MAX_DISTANCE,
        "mbleven supports distances up to {MBLEVEN_MAX_DISTANCE}, got {max_distance}"
    );

    // Orient so the first sequence is the longer one before picking the
    // script row.
    let (longer, shorter) = if first.len() >= second.len() {
        (first.as_bytes(), second.as_bytes())
    } else {
        (second.as_bytes(), first.as_bytes())
    };

    let length_diff = longer.len() - shorter.len();
    if length_diff > max_distance {
        return false;
    }

    let scripts = MBLEVEN_SCRIPTS[SCRIPT_ROW_BASE[max_distance - 1] + length_diff];
    scripts
        .iter()
        .any(|script| script_within(longer, shorter, script, max_distance))
}

/// Walk both sequences applying one edit script on mismatches, returning
/// whether the script explains all differences within `max_distance`.
fn script_within(longer: &[u8], shorter: &[u8], script: &str, max_distance: usize) -> bool {
    let mut ops = script.bytes();
    let mut cost = 0;
    let mut i = 0;
    let mut j = 0;

    while i < longer.len() && j < shorter.len() {
        if longer[i] == shorter[j] {
            i += 1;
            j += 1;
            continue;
        }

        cost += 1;
        match ops.next() {
            Some(b'r') => {
                i += 1;
                j += 1;
            }
            Some(b'd') => i += 1,
            Some(b'i') => j += 1,
            // Script exhausted before both cursors finished
            _ => return false,
        }
    }

    // Whatever one sequence has left over costs one edit per byte
    cost + (longer.len() - i) + (shorter.len() - j) <= max_distance
}

/// Rolling-row Wagner-Fischer bounded-distance check.
///
/// The classic Levenshtein recurrence, keeping only the previous row and
/// the running diagonal value, so memory is linear in the second
/// sequence rather than quadratic. Two early exits: the length
/// difference is a lower bound on the distance, and a row whose minimum
/// already exceeds the threshold can only grow.
pub fn wagner_fischer(first: &str, second: &str, max_distance: usize) -> bool {
    if max_distance == 0 {
        return first == second;
    }

    let first = first.as_bytes();
    let second = second.as_bytes();
    if first.len().abs_diff(second.len()) > max_distance {
        return false;
    }

    let mut row: Vec<usize> = (0..=second.len()).collect();
    for (i, &first_byte) in first.iter().enumerate() {
        let mut diagonal = i;
        row[0] = i + 1;
        let mut row_min = row[0];

        for (j, &second_byte) in second.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if first_byte == second_byte {
                diagonal
            } else {
                row[j + 1].min(row[j]).min(diagonal) + 1
            };
            diagonal = above;
            row_min = row_min.min(row[j + 1]);
        }

        if row_min > max_distance {
            return false;
        }
    }

    row[second.len()] <= max_distance
}

/// Check whether two sequences are within `max_distance` edits of each
/// other, picking the cheaper strategy for the threshold
pub fn within_distance(first: &str, second: &str, max_distance: usize) -> bool {
    if max_distance <= MBLEVEN_MAX_DISTANCE {
        mbleven(first, second, max_distance)
    } else {
        wagner_fischer(first, second, max_distance)
    }
}
