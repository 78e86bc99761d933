//! typegen - expand `@key@` templates once per type
//!
//! This library loads type descriptors (TOML files with a `types_list`),
//! substitutes their placeholders into template files and writes one output
//! per (type, template) pair.
//!
//! # Example
//!
//! ```rust
//! use typegen::{apply_record, parse_descriptor};
//! use std::path::Path;
//!
//! let records = parse_descriptor(
//!     r#"types_list = [{ TYPE = "int", SUFFIX = "i" }]"#,
//!     Path::new("types.toml"),
//! )
//! .unwrap();
//!
//! assert_eq!(apply_record("@TYPE@ value_@SUFFIX@;", &records[0]), "int value_i;");
//! ```

pub mod config;
pub mod descriptor;
pub mod engine;
pub mod error;
pub mod substitute;

pub use config::GenerateConfig;
pub use descriptor::{load_descriptor, parse_descriptor};
pub use engine::{derive_output_name, generate, generate_file, plan, preview, GeneratedFile};
pub use error::{ErrorKind, GenerateError, IoOperation, LoadFailure};
pub use substitute::{apply_record, Placeholder, PlaceholderError, TypeRecord};
