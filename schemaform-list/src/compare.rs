//! Locale-style natural ordering for display strings.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Orders strings the way a person reads them.
///
/// Digit runs compare by numeric value (`"2" < "10"`). Other characters
/// compare by base letter, ignoring case and accents, with whitespace and
/// punctuation before digits and digits before letters. Strings equal under
/// those rules are split by accent (unaccented first), then by case
/// (lowercase first), then by code point.
pub fn natural_compare(a: &str, b: &str) -> Ordering {
    primary(a, b)
        .then_with(|| accent_order(a, b))
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Symbol,
    Digit,
    Letter,
}

fn class(c: char) -> CharClass {
    if c.is_ascii_digit() {
        CharClass::Digit
    } else if c.is_alphanumeric() {
        CharClass::Letter
    } else {
        CharClass::Symbol
    }
}

/// Lowercased base letter: `É` and `e` fold to `e`.
fn fold(c: char) -> char {
    let base = std::iter::once(c)
        .nfd()
        .find(|d| !is_combining_mark(*d))
        .unwrap_or(c);
    base.to_lowercase().next().unwrap_or(base)
}

/// Combining marks of `c` after canonical decomposition.
fn marks(c: char) -> Vec<char> {
    std::iter::once(c).nfd().filter(|d| is_combining_mark(*d)).collect()
}

fn primary(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        let (x, y) = match (left.peek(), right.peek()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(&x), Some(&y)) => (x, y),
        };

        let ord = if x.is_ascii_digit() && y.is_ascii_digit() {
            compare_numbers(&take_digits(&mut left), &take_digits(&mut right))
        } else {
            left.next();
            right.next();
            class(x).cmp(&class(y)).then_with(|| fold(x).cmp(&fold(y)))
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        digits.push(c);
    }
    digits
}

/// Compares unbounded digit runs by value; leading zeros are ignored.
fn compare_numbers(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Unaccented before accented, position by position. Digits are skipped
/// for the same reason as in [`case_order`].
fn accent_order(a: &str, b: &str) -> Ordering {
    accent_marks(a).cmp(accent_marks(b))
}

fn accent_marks(s: &str) -> impl Iterator<Item = Vec<char>> + '_ {
    s.chars().filter(|c| !c.is_ascii_digit()).map(marks)
}

/// Lowercase before uppercase, position by position. Digits are skipped so
/// runs with different leading zeros stay aligned.
fn case_order(a: &str, b: &str) -> Ordering {
    upper_flags(a).cmp(upper_flags(b))
}

fn upper_flags(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars()
        .filter(|c| !c.is_ascii_digit())
        .map(|c| !c.is_lowercase())
}
