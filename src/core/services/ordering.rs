//! Natural ordering of display labels
//!
//! Labels are compared token by token, where a token is either a whole run of
//! ASCII digits or a single other character. Digit runs compare by numeric
//! magnitude, so `net9.0` sorts before `net10.0`. Characters compare
//! case-insensitively, and a character sorts before a digit run at the same
//! position, which keeps `.NET Core 3.1` ahead of `.NET 5.0`. Labels that are
//! equal under these rules fall back to plain ordinal comparison so the order
//! is total.
//!
//! # Examples
//!
//! ```
//! use std::cmp::Ordering;
//! use tfm_values::core::services::natural_cmp;
//!
//! assert_eq!(natural_cmp("net9.0", "net10.0"), Ordering::Less);
//! assert_eq!(natural_cmp("NET8.0", "net8.0"), Ordering::Less);
//! assert_eq!(natural_cmp(".NET Core 3.1", ".NET 5.0"), Ordering::Less);
//! ```

use std::cmp::Ordering;

use crate::core::models::ValueRecord;

/// A single non-digit character or a maximal run of ASCII digits
#[derive(Debug, Clone, Copy)]
enum Token<'a> {
    Char(char),
    Digits(&'a str),
}

impl Token<'_> {
    fn cmp_natural(self, other: Self) -> Ordering {
        match (self, other) {
            (Self::Digits(a), Self::Digits(b)) => cmp_magnitude(a, b),
            (Self::Char(a), Self::Char(b)) => a.to_lowercase().cmp(b.to_lowercase()),
            (Self::Char(_), Self::Digits(_)) => Ordering::Less,
            (Self::Digits(_), Self::Char(_)) => Ordering::Greater,
        }
    }
}

/// Iterator over the tokens of a label
struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        if first.is_ascii_digit() {
            let end = self.rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(self.rest.len());
            let (run, rest) = self.rest.split_at(end);
            self.rest = rest;
            Some(Token::Digits(run))
        } else {
            self.rest = &self.rest[first.len_utf8()..];
            Some(Token::Char(first))
        }
    }
}

const fn tokens(label: &str) -> Tokens<'_> {
    Tokens { rest: label }
}

/// Compare two ASCII digit runs by value, without overflow
fn cmp_magnitude(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compare two labels in natural order
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = tokens(a);
    let mut right = tokens(b);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match x.cmp_natural(y) {
                Ordering::Equal => {},
                unequal => return unequal,
            },
        }
    }
}

/// Sort records by display label in natural order
///
/// The sort is stable: records with identical labels keep their input order.
#[must_use]
pub fn sort_records(mut records: Vec<ValueRecord>) -> Vec<ValueRecord> {
    records.sort_by(|a, b| natural_cmp(a.display_name(), b.display_name()));
    records
}
