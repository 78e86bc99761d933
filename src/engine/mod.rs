//! Generation engine
//!
//! Expands every template once per type record. Descriptors are loaded in
//! order and their records concatenated; jobs then run with records as the
//! outer loop and templates as the inner loop. The first failure aborts the
//! run.

mod file;
mod plan;

pub use file::{derive_output_name, generate_file, output_path};
pub use plan::{plan, GeneratedFile};

use log::{debug, info, warn};

use crate::config::GenerateConfig;
use crate::descriptor::load_descriptor;
use crate::error::GenerateError;
use crate::substitute::TypeRecord;

/// Load every descriptor in order and flatten their records
pub fn load_records(config: &GenerateConfig) -> Result<Vec<TypeRecord>, GenerateError> {
    let mut records = Vec::new();
    for path in &config.descriptors {
        records.extend(load_descriptor(path)?);
    }
    Ok(records)
}

/// Plan a generation without writing anything
///
/// Descriptors are still read. Returns the jobs `generate` would run, in
/// order.
pub fn preview(config: &GenerateConfig) -> Result<Vec<GeneratedFile>, GenerateError> {
    let records = load_records(config)?;
    plan(&records, &config.templates, &config.destination)
}

/// Run a full generation
///
/// Returns the jobs in the order they ran.
pub fn generate(config: &GenerateConfig) -> Result<Vec<GeneratedFile>, GenerateError> {
    let records = load_records(config)?;

    if records.is_empty() || config.templates.is_empty() {
        warn!(
            "nothing to generate: {} type record(s), {} template(s)",
            records.len(),
            config.templates.len()
        );
    }

    let jobs = plan(&records, &config.templates, &config.destination)?;
    for job in &jobs {
        let record = &records[job.record_index];
        debug!(
            "expanding '{}' with [{}]",
            job.template.display(),
            record.label()
        );
        file::expand_into(&job.template, record, &job.destination)?;
        info!("generated {}", job.destination.display());
    }

    Ok(jobs)
}
