use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str =
    "https://data.insideairbnb.com/spain/comunidad-de-madrid/madrid/2025-09-14";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SourceFile {
    /// File name inside the data directory.
    pub name: String,
    /// Path of the file relative to the source base URL.
    pub path: String,
    /// Gzip-compressed files are decompressed into this file name, after
    /// which the compressed download is removed.
    #[serde(default)]
    pub decompress_to: Option<String>,
}

impl SourceFile {
    pub fn plain(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            decompress_to: None,
        }
    }

    pub fn gzip(name: &str, path: &str, decompress_to: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            decompress_to: Some(decompress_to.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    pub base_url: String,
    pub files: Vec<SourceFile>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            files: vec![
                SourceFile::gzip("listings.csv.gz", "data/listings.csv.gz", "listings.csv"),
                SourceFile::gzip("calendar.csv.gz", "data/calendar.csv.gz", "calendar.csv"),
                SourceFile::gzip("reviews.csv.gz", "data/reviews.csv.gz", "reviews.csv"),
                SourceFile::plain("listings_summary.csv", "visualisations/listings.csv"),
                SourceFile::plain("reviews_summary.csv", "visualisations/reviews.csv"),
                SourceFile::plain("neighbourhoods.csv", "visualisations/neighbourhoods.csv"),
                SourceFile::plain(
                    "neighbourhoods.geojson",
                    "visualisations/neighbourhoods.geojson",
                ),
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub path: PathBuf,
    /// Files covered by the generated manifest, in manifest order.
    pub expected_files: Vec<String>,
    pub expected_manifest: String,
    pub generated_manifest: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data").join("original"),
            expected_files: [
                "calendar.csv",
                "listings.csv",
                "listings_summary.csv",
                "neighbourhoods.csv",
                "neighbourhoods.geojson",
                "reviews.csv",
                "reviews_summary.csv",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            expected_manifest: "checksums_expected.sha256".to_string(),
            generated_manifest: "checksums.sha256".to_string(),
        }
    }
}

impl OutputConfig {
    pub fn expected_manifest_path(&self) -> PathBuf {
        self.path.join(&self.expected_manifest)
    }

    pub fn generated_manifest_path(&self) -> PathBuf {
        self.path.join(&self.generated_manifest)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub source: SourceConfig,
    pub output: OutputConfig,
}
