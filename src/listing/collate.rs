//! Base-sensitivity text comparison
//!
//! Two strings compare equal here when they differ only in case or
//! diacritics (`É` ~ `e`). Folding decomposes to NFD, drops combining marks
//! and lowercases. `natural_cmp` additionally compares runs of digits by
//! numeric value, so `ep 2` sorts before `ep 10`.

use super::models::ListingNode;
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold a string for base-sensitivity comparison
#[must_use]
pub fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Natural, case- and diacritic-insensitive ordering of two labels
#[must_use]
pub fn natural_cmp(first: &str, second: &str) -> Ordering {
    let first: Vec<char> = fold(first).chars().collect();
    let second: Vec<char> = fold(second).chars().collect();

    let (mut i, mut j) = (0, 0);

    while i < first.len() && j < second.len() {
        let (a, b) = (first[i], second[j]);

        if a.is_ascii_digit() && b.is_ascii_digit() {
            let a_end = digit_run_end(&first, i);
            let b_end = digit_run_end(&second, j);

            let order = cmp_numeric(&first[i..a_end], &second[j..b_end]);
            if order != Ordering::Equal {
                return order;
            }

            i = a_end;
            j = b_end;
            continue;
        }

        if a != b {
            return a.cmp(&b);
        }

        i += 1;
        j += 1;
    }

    (first.len() - i).cmp(&(second.len() - j))
}

/// Stable sort: child count ascending, then natural label order
pub fn sort_nodes(nodes: &mut [ListingNode]) {
    nodes.sort_by(|a, b| {
        a.child_count
            .cmp(&b.child_count)
            .then_with(|| natural_cmp(&a.label, &b.label))
    });
}

fn digit_run_end(chars: &[char], start: usize) -> usize {
    chars[start..]
        .iter()
        .position(|c| !c.is_ascii_digit())
        .map_or(chars.len(), |offset| start + offset)
}

fn cmp_numeric(a: &[char], b: &[char]) -> Ordering {
    let a = trim_leading_zeros(a);
    let b = trim_leading_zeros(b);

    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn trim_leading_zeros(digits: &[char]) -> &[char] {
    let zeros = digits.iter().take_while(|c| **c == '0').count();
    &digits[zeros..]
}
