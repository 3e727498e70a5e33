//! Positional path templates.
//!
//! Action paths use zero-based positional placeholders: `{0}` refers to the
//! first path argument of a call, `{1}` to the second, and so on. Braces
//! around anything other than digits are left untouched.
//!
//! # Example
//!
//! ```rust
//! use snorlax::rest::{build_path, placeholders, required_args};
//!
//! let template = "/{0}/{1}/{2}";
//! assert_eq!(placeholders(template), vec![0, 1, 2]);
//! assert_eq!(required_args(template), 3);
//!
//! let path = build_path(template, &["143", "144", "rest"]).unwrap();
//! assert_eq!(path, "/143/144/rest");
//! ```

use std::fmt::Display;

/// A placeholder referenced an argument that was not supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingPathArgument {
    /// The placeholder index that had no argument.
    pub index: usize,
    /// How many arguments were supplied.
    pub supplied: usize,
}

/// A parsed piece of a template.
enum Segment<'a> {
    Literal(&'a str),
    Placeholder(usize),
}

/// Splits a template into literal text and `{n}` placeholders.
fn segments(template: &str) -> Vec<Segment<'_>> {
    let mut result = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();
        let closes = digits > 0 && after.as_bytes().get(digits) == Some(&b'}');

        match after[..digits].parse::<usize>() {
            Ok(index) if closes => {
                if open > 0 {
                    result.push(Segment::Literal(&rest[..open]));
                }
                result.push(Segment::Placeholder(index));
                rest = &after[digits + 1..];
            }
            _ => {
                result.push(Segment::Literal(&rest[..=open]));
                rest = after;
            }
        }
    }

    if !rest.is_empty() {
        result.push(Segment::Literal(rest));
    }
    result
}

/// Returns the placeholder indices of a template in the order they appear.
///
/// Repeated placeholders are reported once per occurrence.
#[must_use]
pub fn placeholders(template: &str) -> Vec<usize> {
    segments(template)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Placeholder(index) => Some(index),
            Segment::Literal(_) => None,
        })
        .collect()
}

/// Returns how many positional arguments a template needs.
#[must_use]
pub fn required_args(template: &str) -> usize {
    placeholders(template).into_iter().max().map_or(0, |max| max + 1)
}

/// Builds a path by replacing every `{n}` with the string form of `args[n]`.
///
/// Extra arguments are ignored.
///
/// # Errors
///
/// Returns [`MissingPathArgument`] for the first placeholder whose index is
/// out of range.
pub fn build_path<V: Display>(template: &str, args: &[V]) -> Result<String, MissingPathArgument> {
    let mut path = String::with_capacity(template.len());

    for segment in segments(template) {
        match segment {
            Segment::Literal(text) => path.push_str(text),
            Segment::Placeholder(index) => {
                let value = args.get(index).ok_or(MissingPathArgument {
                    index,
                    supplied: args.len(),
                })?;
                path.push_str(&value.to_string());
            }
        }
    }

    Ok(path)
}
