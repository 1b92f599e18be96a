use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Compare two token keys the way a human reads them.
///
/// Runs of ASCII digits compare by numeric value (`size-2` sorts before
/// `size-10`), letters compare case-insensitively, and punctuation sorts
/// ahead of digits which sort ahead of letters. Keys that only differ by
/// case put the lowercase form first; any remaining tie falls back to byte
/// order so the result is a total order.
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    compare_primary(a, b)
        .then_with(|| compare_case(a, b))
        .then_with(|| a.cmp(b))
}

/// Sort keys in place with [`compare_keys`].
pub fn sort_keys<S: AsRef<str>>(keys: &mut [S]) {
    keys.sort_by(|a, b| compare_keys(a.as_ref(), b.as_ref()));
}

fn compare_primary(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let l_run = take_digits(&mut left);
                let r_run = take_digits(&mut right);
                let ord = compare_digit_runs(&l_run, &r_run);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(l), Some(r)) => {
                let ord = collation_key(l).cmp(&collation_key(r));
                if ord != Ordering::Equal {
                    return ord;
                }
                left.next();
                right.next();
            }
        }
    }
}

fn compare_case(a: &str, b: &str) -> Ordering {
    for (l, r) in a.chars().zip(b.chars()) {
        if l != r && l.to_lowercase().eq(r.to_lowercase()) {
            return match (l.is_lowercase(), r.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => l.cmp(&r),
            };
        }
    }
    Ordering::Equal
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Punctuation in collation order.
const PUNCTUATION: &str = "_-,;:!?.'\"()[]{}@*/\\&#%";

/// Symbols in collation order.
const SYMBOLS: &str = "`^+<=>|~$";

fn collation_key(c: char) -> (u8, usize, char) {
    if c.is_whitespace() {
        return (0, 0, c);
    }
    if let Some(position) = PUNCTUATION.find(c) {
        return (1, position, c);
    }
    if let Some(position) = SYMBOLS.find(c) {
        return (2, position, c);
    }
    let rank = if c.is_ascii_punctuation() {
        1
    } else if c.is_ascii_digit() {
        3
    } else {
        4
    };
    (rank, 0, c.to_lowercase().next().unwrap_or(c))
}
