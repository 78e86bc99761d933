//! Load type records from TOML descriptors

use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::{GenerateError, LoadFailure};
use crate::substitute::TypeRecord;

/// TOML structure for deserializing descriptors
///
/// Anything besides `types_list` is ignored so descriptors can carry their
/// own metadata.
#[derive(Deserialize)]
struct TomlDescriptor {
    types_list: Option<toml::Value>,
}

/// Read a descriptor file and compile its type records
pub fn load_descriptor(path: &Path) -> Result<Vec<TypeRecord>, GenerateError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| GenerateError::load(path, LoadFailure::Read(e)))?;
    parse_descriptor(&content, path)
}

/// Compile the type records of descriptor text
///
/// `path` is only used to give errors context.
pub fn parse_descriptor(content: &str, path: &Path) -> Result<Vec<TypeRecord>, GenerateError> {
    let parsed: TomlDescriptor = toml::from_str(content).map_err(|error| {
        GenerateError::load(
            path,
            LoadFailure::Parse {
                error,
                text: content.to_string(),
            },
        )
    })?;

    let Some(types_list) = parsed.types_list else {
        return Err(GenerateError::Configuration {
            path: path.to_path_buf(),
        });
    };

    let toml::Value::Array(entries) = types_list else {
        return Err(GenerateError::load(path, LoadFailure::NotAList));
    };

    let records = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            compile_entry(index, entry).map_err(|failure| GenerateError::load(path, failure))
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        "loaded {} type record(s) from '{}'",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Turn one `types_list` element into a record, keeping key order
fn compile_entry(index: usize, entry: toml::Value) -> Result<TypeRecord, LoadFailure> {
    let toml::Value::Table(table) = entry else {
        return Err(LoadFailure::InvalidEntry { index });
    };

    let mut pairs = Vec::with_capacity(table.len());
    for (key, value) in table {
        match value {
            toml::Value::String(s) => pairs.push((key, s)),
            _ => return Err(LoadFailure::InvalidValue { index, key }),
        }
    }

    TypeRecord::from_pairs(pairs).map_err(|error| LoadFailure::InvalidKey { index, error })
}
