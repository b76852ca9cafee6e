//! Near-adjacency between words
//!
//! A single linear scan with two cursors replaces full edit-distance
//! dynamic programming. It is exact for budgets of 0 and 1, which is all
//! the ladder search needs.

/// Whether `a` can be turned into `b` with at most `budget` single-character
/// edits, by the two-cursor scan.
///
/// On a mismatch the cursor of the longer word advances (both when the
/// lengths match). Characters left over on either side after the scan count
/// as one more difference.
pub fn edit_distance_within(a: &str, b: &str, budget: usize) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (len_a, len_b) = (a.len(), b.len());

    if len_a.abs_diff(len_b) > budget {
        return false;
    }

    let (mut i, mut j, mut diffs) = (0, 0, 0);
    while i < len_a && j < len_b {
        if a[i] == b[j] {
            i += 1;
            j += 1;
            continue;
        }

        diffs += 1;
        if diffs > budget {
            return false;
        }
        match len_a.cmp(&len_b) {
            std::cmp::Ordering::Greater => i += 1,
            std::cmp::Ordering::Less => j += 1,
            std::cmp::Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }

    if i < len_a || j < len_b {
        diffs += 1;
    }

    diffs <= budget
}

/// Ladder adjacency: exactly one substitution, insertion, or deletion.
///
/// Identical words are not adjacent, so the word graph has no self-loops.
pub fn is_one_edit_apart(a: &str, b: &str) -> bool {
    a != b && edit_distance_within(a, b, 1)
}
