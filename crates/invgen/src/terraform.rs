//! parsed `terraform output -json` document
//!
//! Terraform prints its outputs as one JSON object where each output is
//! wrapped in an object carrying the `value` (plus type metadata we do
//! not read). Lookups are shallow: a missing output or a missing `value`
//! falls back to an empty default, a `value` of the wrong shape is an
//! error.
use std::path::{Path, PathBuf};

#[derive(Default, Debug)]
pub struct TerraformOutputs {
    outputs: serde_json::Map<String, serde_json::Value>,
}

impl TerraformOutputs {
    /// Reads and parses the output document at `path`
    ///
    /// The absent-file case is detected up front so the caller can point
    /// the user at the terraform command that produces the file. Anything
    /// else (unreadable file, invalid JSON) propagates as-is.
    pub fn load_file(path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::MissingInput {
                path: path.to_path_buf(),
            });
        }

        tracing::info!(path=%path.display(), "loading terraform output");
        let file_contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&file_contents)
    }

    pub fn from_json_str(document: &str) -> Result<Self, LoadError> {
        let outputs = serde_json::from_str(document)?;
        Ok(Self { outputs })
    }

    /// String-list output (`<name>.value`), `[]` when absent
    pub fn string_list(&self, name: &str) -> Result<Vec<String>, LoadError> {
        let Some(value) = self.value_of(name) else {
            return Ok(Vec::new());
        };

        let items = value.as_array().ok_or_else(|| malformed(name))?;
        items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| malformed(name))
            })
            .collect()
    }

    /// String output (`<name>.value`), `""` when absent
    pub fn string(&self, name: &str) -> Result<String, LoadError> {
        let Some(value) = self.value_of(name) else {
            return Ok(String::new());
        };

        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| malformed(name))
    }

    fn value_of(&self, name: &str) -> Option<&serde_json::Value> {
        self.outputs.get(name)?.get("value")
    }
}

fn malformed(name: &str) -> LoadError {
    LoadError::MalformedOutput {
        name: name.to_string(),
    }
}

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("{} not found. Run 'terraform output -json > inventory.json' first.", .path.display())]
    MissingInput { path: PathBuf },
    #[error("IO error")]
    Io(#[from] std::io::Error),
    #[error("Unable to parse terraform output as JSON")]
    JsonParseFailed(#[from] serde_json::Error),
    #[error("terraform output '{name}' does not have the expected shape")]
    MalformedOutput { name: String },
}
