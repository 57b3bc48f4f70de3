//! Store trait and listing order
//!
//! Defines the enumeration abstraction used by the paginator.

use crate::error::Result;
use crate::types::Entry;
use std::cmp::Ordering;

/// Core trait for backing stores
///
/// `list_all` always returns every entry. Slicing belongs to the paginator.
/// Two calls against an unchanged store must return the same order.
pub trait EntrySource: Send + Sync {
    /// List every entry currently in the store
    fn list_all(&self) -> Result<Vec<Entry>>;

    /// Human-readable name of the store, used in logs and errors
    fn describe(&self) -> String;
}

impl EntrySource for Box<dyn EntrySource> {
    fn list_all(&self) -> Result<Vec<Entry>> {
        (**self).list_all()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Compare two names so that digit runs order numerically
///
/// `file-2` sorts before `file-10`. Names that compare equal chunk by chunk
/// (e.g. `file-01` and `file-1`) fall back to byte order, which keeps the
/// ordering total.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let left = chunks(a);
    let right = chunks(b);

    for (x, y) in left.iter().zip(right.iter()) {
        let ord = if is_digits(x) && is_digits(y) {
            cmp_digits(x, y)
        } else {
            x.cmp(y)
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }

    left.len().cmp(&right.len()).then_with(|| a.cmp(b))
}

/// Split a name into alternating digit and non-digit runs
fn chunks(s: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut prev_digit = None;

    for (i, c) in s.char_indices() {
        let digit = c.is_ascii_digit();
        if prev_digit.is_some_and(|p| p != digit) {
            out.push(&s[start..i]);
            start = i;
        }
        prev_digit = Some(digit);
    }
    if start < s.len() {
        out.push(&s[start..]);
    }

    out
}

fn is_digits(chunk: &str) -> bool {
    chunk.as_bytes().first().is_some_and(u8::is_ascii_digit)
}

fn cmp_digits(x: &str, y: &str) -> Ordering {
    let x = x.trim_start_matches('0');
    let y = y.trim_start_matches('0');
    x.len().cmp(&y.len()).then_with(|| x.cmp(y))
}
