//! Ordering of (type record, template) jobs

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::debug;

use super::file::{ensure_not_template, output_path};
use crate::error::GenerateError;
use crate::substitute::TypeRecord;

/// One (type record, template) pair and where its output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Index of the record in the flattened record list
    pub record_index: usize,
    /// Template the output is expanded from
    pub template: PathBuf,
    /// Output path under the destination directory
    pub destination: PathBuf,
}

/// Compute every job in run order: records outer, templates inner
///
/// Fails before anything is written if an output would land on its own
/// template. Destinations are not deduplicated. When two jobs share a
/// destination the later one wins at generation time.
pub fn plan(
    records: &[TypeRecord],
    templates: &[PathBuf],
    destination_dir: &Path,
) -> Result<Vec<GeneratedFile>, GenerateError> {
    let mut jobs = Vec::with_capacity(records.len() * templates.len());
    let mut seen: HashMap<PathBuf, usize> = HashMap::new();

    for (record_index, record) in records.iter().enumerate() {
        for template in templates {
            let destination = output_path(template, record, destination_dir)?;
            ensure_not_template(template, &destination)?;

            if let Some(previous) = seen.insert(destination.clone(), jobs.len()) {
                debug!(
                    "'{}' is produced by job {} and job {}, keeping the later",
                    destination.display(),
                    previous,
                    jobs.len()
                );
            }

            jobs.push(GeneratedFile {
                record_index,
                template: template.clone(),
                destination,
            });
        }
    }

    Ok(jobs)
}
