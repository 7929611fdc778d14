use super::content_digest_hasher::sha256_of_file;
use crate::error::DataPrepError;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManifestEntry {
    pub digest: String,
    pub file_name: String,
}

impl fmt::Display for ManifestEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}", self.digest, self.file_name)
    }
}

/// An ordered list of `<digest>  <file name>` entries, as produced by
/// `sha256sum`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new(entries: Vec<ManifestEntry>) -> Self {
        Self { entries }
    }

    /// Parses manifest text. Blank lines and lines that do not consist of
    /// exactly two whitespace-separated tokens are skipped.
    pub fn parse(content: &str) -> Self {
        let entries = content
            .lines()
            .filter_map(|line| {
                let mut tokens = line.split_whitespace();
                match (tokens.next(), tokens.next(), tokens.next()) {
                    (Some(digest), Some(file_name), None) => Some(ManifestEntry {
                        digest: digest.to_string(),
                        file_name: file_name.to_string(),
                    }),
                    _ => None,
                }
            })
            .collect();
        Self { entries }
    }

    /// Loads a manifest from disk, returning `None` if the file does not exist.
    pub fn load_if_exists(path: &Path) -> Result<Option<Self>, DataPrepError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(Self::parse(&content))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DataPrepError::ManifestLoad {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }),
        }
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), DataPrepError> {
        std::fs::write(path, self.render()).map_err(|e| DataPrepError::ManifestSave {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{entry}\n"))
            .collect()
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Digest recorded for `file_name`; the last entry wins on duplicates.
    pub fn digest_of(&self, file_name: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.file_name == file_name)
            .map(|entry| entry.digest.as_str())
    }

    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|entry| (entry.file_name.clone(), entry.digest.clone()))
            .collect()
    }
}

/// Hashes every file in `file_names` under `dir` and writes the manifest to
/// `manifest_path`, in the order given.
///
/// Nothing is written if any file cannot be hashed.
pub fn write_manifest(
    dir: &Path,
    file_names: &[String],
    manifest_path: &Path,
) -> Result<Manifest, DataPrepError> {
    let entries = file_names
        .iter()
        .map(|file_name| {
            let digest = sha256_of_file(&dir.join(file_name))?;
            tracing::debug!(file = %file_name, %digest, "Hashed");
            Ok(ManifestEntry {
                digest,
                file_name: file_name.clone(),
            })
        })
        .collect::<Result<Vec<_>, DataPrepError>>()?;

    let manifest = Manifest::new(entries);
    manifest.save_to_file(manifest_path)?;
    Ok(manifest)
}
