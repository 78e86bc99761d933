//! Configuration for a generation run

use std::path::PathBuf;

/// Inputs and destination of a generation run
///
/// The destination is always explicit; callers wanting the working directory
/// resolve it themselves.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Descriptor files, loaded in this order
    pub descriptors: Vec<PathBuf>,

    /// Template files, expanded in this order for every record
    pub templates: Vec<PathBuf>,

    /// Directory generated files are written to
    pub destination: PathBuf,
}

impl GenerateConfig {
    /// Create an empty configuration writing into `destination`
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            descriptors: Vec::new(),
            templates: Vec::new(),
            destination: destination.into(),
        }
    }

    /// Add a descriptor file
    pub fn with_descriptor(mut self, path: impl Into<PathBuf>) -> Self {
        self.descriptors.push(path.into());
        self
    }

    /// Add several descriptor files
    pub fn with_descriptors<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.descriptors.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Add a template file
    pub fn with_template(mut self, path: impl Into<PathBuf>) -> Self {
        self.templates.push(path.into());
        self
    }

    /// Add several template files
    pub fn with_templates<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.templates.extend(paths.into_iter().map(Into::into));
        self
    }
}
