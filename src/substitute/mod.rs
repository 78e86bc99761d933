//! Substitution of `@key@` placeholders
//!
//! A [`TypeRecord`] is an ordered list of [`Placeholder`] → replacement pairs.
//! Applying it to text rewrites the text once per pair, in order.
//!
//! # Example
//!
//! ```rust
//! use typegen::substitute::{apply_record, TypeRecord};
//!
//! let record = TypeRecord::from_pairs([("TYPE", "int"), ("SUFFIX", "i")]).unwrap();
//! assert_eq!(apply_record("@TYPE@ value_@SUFFIX@;", &record), "int value_i;");
//! ```

mod placeholder;
mod record;

pub use placeholder::{Placeholder, PlaceholderError, DELIMITER};
pub use record::{apply_record, TypeRecord};
