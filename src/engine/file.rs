//! Per-file generation

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{GenerateError, IoOperation};
use crate::substitute::TypeRecord;

/// Apply a record to a template's file name (directory components stripped)
pub fn derive_output_name(template: &Path, record: &TypeRecord) -> Result<String, GenerateError> {
    let name = template
        .file_name()
        .ok_or_else(|| GenerateError::InvalidTemplatePath {
            path: template.to_path_buf(),
        })?;
    Ok(record.apply(&name.to_string_lossy()))
}

/// Destination path for a template under `destination_dir`
pub fn output_path(
    template: &Path,
    record: &TypeRecord,
    destination_dir: &Path,
) -> Result<PathBuf, GenerateError> {
    Ok(destination_dir.join(derive_output_name(template, record)?))
}

/// Fail if `destination` resolves to `template` itself
///
/// Truncating the destination would otherwise empty the template before it
/// is read. Paths that don't exist yet can't be the template.
pub(crate) fn ensure_not_template(
    template: &Path,
    destination: &Path,
) -> Result<(), GenerateError> {
    let (Ok(template_real), Ok(destination_real)) =
        (fs::canonicalize(template), fs::canonicalize(destination))
    else {
        return Ok(());
    };

    if template_real == destination_real {
        return Err(GenerateError::io(
            IoOperation::WriteOutput,
            destination,
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("output would overwrite template '{}'", template.display()),
            ),
        ));
    }
    Ok(())
}

/// Expand one template with one record into `destination_dir`
///
/// The destination is truncated if it exists, unless it is the template
/// itself, which is an error. The template is processed line
/// by line and each line keeps the terminator it was read with. Returns the
/// path written.
pub fn generate_file(
    template: &Path,
    record: &TypeRecord,
    destination_dir: &Path,
) -> Result<PathBuf, GenerateError> {
    let destination = output_path(template, record, destination_dir)?;
    expand_into(template, record, &destination)?;
    Ok(destination)
}

/// Stream `template` through `record` into `destination`
pub(crate) fn expand_into(
    template: &Path,
    record: &TypeRecord,
    destination: &Path,
) -> Result<(), GenerateError> {
    ensure_not_template(template, destination)?;

    let read_err = |e: io::Error| GenerateError::io(IoOperation::ReadTemplate, template, e);
    let write_err = |e: io::Error| GenerateError::io(IoOperation::WriteOutput, destination, e);

    let mut reader = BufReader::new(File::open(template).map_err(read_err)?);
    let mut writer = BufWriter::new(File::create(destination).map_err(write_err)?);

    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line).map_err(read_err)? == 0 {
            break;
        }
        writer
            .write_all(record.apply(&line).as_bytes())
            .map_err(write_err)?;
    }

    // BufWriter swallows errors on drop
    writer.flush().map_err(write_err)
}
