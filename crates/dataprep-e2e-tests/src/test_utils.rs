use dataprep_lib::config::{Config, OutputConfig, SourceConfig, SourceFile};
use eyre::Result;
use flate2::Compression;
use flate2::write::GzEncoder;
use sha2::{Digest, Sha256};
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SNAPSHOT_PREFIX: &str = "/spain/comunidad-de-madrid/madrid/2025-09-14";

/// A served file and the content expected on disk once the run finishes.
#[derive(Clone, Debug)]
pub struct FixtureFile {
    pub source: SourceFile,
    pub content: Vec<u8>,
}

impl FixtureFile {
    pub fn local_name(&self) -> &str {
        self.source
            .decompress_to
            .as_deref()
            .unwrap_or(&self.source.name)
    }

    pub fn served_body(&self) -> Result<Vec<u8>> {
        if self.source.decompress_to.is_some() {
            gzip(&self.content)
        } else {
            Ok(self.content.clone())
        }
    }
}

/// Small stand-ins for the Madrid snapshot, laid out the same way.
pub fn madrid_fixture() -> Vec<FixtureFile> {
    SourceConfig::default()
        .files
        .into_iter()
        .map(|source| {
            let content = format!("fixture for {}\nid,value\n1,{}\n", source.path, source.name)
                .into_bytes();
            FixtureFile { source, content }
        })
        .collect()
}

pub fn gzip(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

pub async fn mount_fixture(server: &MockServer, files: &[FixtureFile]) -> Result<()> {
    for file in files {
        Mock::given(method("GET"))
            .and(path(format!("{SNAPSHOT_PREFIX}/{}", file.source.path)))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(file.served_body()?))
            .mount(server)
            .await;
    }
    Ok(())
}

pub fn create_test_config(server_uri: &str, output_dir: &Path) -> Config {
    Config {
        source: SourceConfig {
            base_url: format!("{server_uri}{SNAPSHOT_PREFIX}"),
            ..SourceConfig::default()
        },
        output: OutputConfig {
            path: output_dir.to_path_buf(),
            ..OutputConfig::default()
        },
    }
}

/// Renders a manifest in the on-disk format for the given files, in the
/// configured expected-file order.
pub fn expected_manifest_for(config: &Config, files: &[FixtureFile]) -> String {
    config
        .output
        .expected_files
        .iter()
        .filter_map(|name| {
            files
                .iter()
                .find(|file| file.local_name() == name)
                .map(|file| format!("{}  {}\n", sha256_hex(&file.content), name))
        })
        .collect()
}

pub fn setup_test_environment(config: &Config) -> Result<TempDir> {
    let temp_dir = tempfile::tempdir()?;

    let config_path = temp_dir.path().join("config.json");
    std::fs::write(&config_path, serde_json::to_string_pretty(config)?)?;

    Ok(temp_dir)
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("dataprep_lib=debug,dataprep_e2e_tests=debug")
        .with_test_writer()
        .try_init()
        .ok();
}
