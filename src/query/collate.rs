//! Name ordering for the `name` sort key.
//!
//! Approximates root-locale collation in three levels. Base letters are
//! compared first with case and accents stripped, so `Éclair` files under
//! `e`. Names equal at that level are ordered unaccented before accented,
//! and finally lowercase before uppercase. Fully identical names compare
//! equal so a stable sort keeps catalog order.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compares two display names in ascending alphabetical order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| case_tiebreak(a, b))
}

/// Lowercased letters with every combining mark removed.
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Lowercased decomposition, marks kept. A bare letter sorts before the
/// same letter followed by a mark.
fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn case_tiebreak(a: &str, b: &str) -> Ordering {
    for (ca, cb) in a.nfd().zip(b.nfd()) {
        if ca == cb {
            continue;
        }
        return match (ca.is_lowercase(), cb.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => ca.cmp(&cb),
        };
    }
    a.nfd().count().cmp(&b.nfd().count())
}
