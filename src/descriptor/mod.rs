//! Type descriptors
//!
//! A descriptor is a TOML file defining a `types_list` array. Each element is
//! a table of placeholder keys to replacement strings and becomes one
//! [`TypeRecord`](crate::substitute::TypeRecord):
//!
//! ```toml
//! [[types_list]]
//! t = "d"
//! type = "gdouble"
//!
//! [[types_list]]
//! t = "z"
//! type = "gcomplex128"
//! ```

mod loader;

pub use loader::{load_descriptor, parse_descriptor};
